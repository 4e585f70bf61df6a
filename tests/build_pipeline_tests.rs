mod utils;

use clap::Parser;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use test_log::test;
use uniffi_template_tools::build::{BuildConfig, BuildPipeline};
use uniffi_template_tools::cli::{run_build_with, BuildArgs};
use uniffi_template_tools::config::ToolConfig;
use uniffi_template_tools::error::Error;
use uniffi_template_tools::scaffold::{ProjectKind, ScaffoldOptions, ScaffoldPipeline};
use utils::{files_mentioning, placeholder_checkout, FakeRunner};

/// A checkout already scaffolded as the library `Sample`.
fn sample_checkout() -> TempDir {
    let checkout = placeholder_checkout();
    let options =
        ScaffoldOptions { name: "Sample".into(), kind: ProjectKind::Library, reinit_git: false };
    ScaffoldPipeline::new(&FakeRunner::new(), &ToolConfig::default(), checkout.path())
        .run(&options)
        .unwrap();
    checkout
}

fn build(runner: &FakeRunner, root: &Path, build: BuildConfig) -> uniffi_template_tools::error::Result<std::path::PathBuf> {
    BuildPipeline::new(runner, &ToolConfig::default(), root, build).run()
}

#[test]
fn debug_build_compiles_once_and_bundles() {
    let checkout = sample_checkout();
    let root = checkout.path();
    let runner = FakeRunner::new();

    let bundle = build(&runner, root, BuildConfig::default()).unwrap();

    assert_eq!(bundle, root.join("Sources/SampleRust/lib/SampleRust.xcframework"));
    assert!(bundle.join("Info.plist").exists());

    let compiles = runner.calls("cargo", "build");
    assert_eq!(compiles.len(), 1);
    assert_eq!(compiles[0].args_lossy(), vec!["build"]);
    assert_eq!(compiles[0].get_current_dir(), Some(root.join("Sources/SampleRust/cargo").as_path()));
    assert!(compiles[0].get_envs().is_empty());

    assert!(runner.recorded().iter().all(|i| i.program() != "lipo" && i.program() != "rustup"));

    let bundle_call = runner.calls("xcrun", "xcodebuild").pop().unwrap();
    assert!(bundle_call
        .args_lossy()
        .contains(&root.join("Sources/SampleRust/cargo/target/debug/libsample.a").display().to_string()));
    assert_eq!(bundle_call.get_current_dir(), Some(root));
}

#[test]
fn bindings_are_moved_and_renamed() {
    let checkout = sample_checkout();
    let root = checkout.path();
    let runner = FakeRunner::new();

    build(&runner, root, BuildConfig::default()).unwrap();

    let generate = runner.calls("cargo", "run").pop().unwrap();
    assert_eq!(
        generate.args_lossy(),
        vec![
            "run".to_string(),
            "--bin".into(),
            "uniffi-bindgen".into(),
            "--".into(),
            "generate".into(),
            "--language".into(),
            "swift".into(),
            "--out-dir".into(),
            root.join("Sources/SampleRust/include").display().to_string(),
            Path::new("src").join("sample.udl").display().to_string(),
        ]
    );

    let swift = fs::read_to_string(root.join("Sources/SampleBindings/SampleBindings.swift")).unwrap();
    assert!(swift.contains("import SampleCBindings"));
    for file in ["SampleRust.h", "SampleRust.modulemap"] {
        let content = fs::read_to_string(root.join("Sources/SampleRust/include").join(file)).unwrap();
        assert!(content.contains("SampleRust"), "{file} was not rewritten");
    }
    assert!(files_mentioning(&root.join("Sources"), "sampleFFI").is_empty());
}

#[test]
fn release_build_passes_release_flag() {
    let checkout = sample_checkout();
    let runner = FakeRunner::new();

    build(&runner, checkout.path(), BuildConfig { debug: false, universal: false }).unwrap();

    assert_eq!(runner.calls("cargo", "build")[0].args_lossy(), vec!["build", "--release"]);
}

#[test]
fn universal_build_compiles_each_target_and_merges() {
    let checkout = sample_checkout();
    let root = checkout.path();
    let runner = FakeRunner::new();

    build(&runner, root, BuildConfig { debug: false, universal: true }).unwrap();

    let compiles = runner.calls("cargo", "build");
    assert_eq!(compiles.len(), 3);
    assert!(compiles[0].get_envs().is_empty());
    for (compile, target) in compiles[1..].iter().zip(["aarch64-apple-darwin", "x86_64-apple-darwin"]) {
        assert_eq!(compile.args_lossy(), vec!["build", "--release", "--target", target]);
        assert_eq!(compile.get_env("SDKROOT"), Some(&OsString::from("/SDKs/MacOSX14.2.sdk")));
        assert_eq!(compile.get_env("MACOSX_DEPLOYMENT_TARGET"), Some(&OsString::from("14.2")));
    }

    let cargo_target = root.join("Sources/SampleRust/cargo/target");
    let merged = cargo_target.join("universal-apple-darwin/release/libsample.a");
    let lipo = runner.calls("lipo", "-create").pop().unwrap();
    assert_eq!(
        lipo.args_lossy(),
        vec![
            "-create".to_string(),
            cargo_target.join("aarch64-apple-darwin/release/libsample.a").display().to_string(),
            cargo_target.join("x86_64-apple-darwin/release/libsample.a").display().to_string(),
            "-output".into(),
            merged.display().to_string(),
        ]
    );
    assert!(lipo.get_envs().is_empty());
    assert!(merged.exists());

    let bundle_call = runner.calls("xcrun", "xcodebuild").pop().unwrap();
    assert!(bundle_call.args_lossy().contains(&merged.display().to_string()));
    assert!(bundle_call.get_envs().is_empty());
}

#[test]
fn configured_deployment_target_wins_over_sdk_version() {
    let checkout = sample_checkout();
    let runner = FakeRunner::new();
    let config = ToolConfig { deployment_target: Some("11.0".into()), ..ToolConfig::default() };

    BuildPipeline::new(&runner, &config, checkout.path(), BuildConfig { debug: true, universal: true })
        .run()
        .unwrap();

    let compiles = runner.calls("cargo", "build");
    assert_eq!(compiles[1].get_env("MACOSX_DEPLOYMENT_TARGET"), Some(&OsString::from("11.0")));
}

#[test]
fn missing_target_stops_before_any_build() {
    let checkout = sample_checkout();
    let runner = FakeRunner::new().with_installed_targets(&["aarch64-apple-darwin"]);

    let err = build(&runner, checkout.path(), BuildConfig { debug: true, universal: true }).unwrap_err();

    assert!(matches!(err, Error::MissingTarget { ref target } if target == "x86_64-apple-darwin"));
    assert!(err.to_string().contains("rustup target add x86_64-apple-darwin"));
    assert!(runner.calls("cargo", "run").is_empty());
    assert!(runner.calls("cargo", "build").is_empty());
}

#[test]
fn missing_tool_runs_nothing() {
    let checkout = sample_checkout();
    let runner = FakeRunner::new().without_tool("xcrun");

    let err = build(&runner, checkout.path(), BuildConfig::default()).unwrap_err();

    assert!(matches!(err, Error::ToolMissing { ref name, .. } if name == "Xcode"));
    assert!(runner.recorded().is_empty());
}

#[test]
fn universal_build_requires_lipo() {
    let checkout = sample_checkout();
    let runner = FakeRunner::new().without_tool("lipo");

    let err = build(&runner, checkout.path(), BuildConfig { debug: true, universal: true }).unwrap_err();

    assert!(matches!(err, Error::ToolMissing { ref name, .. } if name == "lipo"));
}

#[test]
fn missing_generator_output_is_reported() {
    let checkout = sample_checkout();
    let root = checkout.path();
    let runner = FakeRunner::new().skipping_output("sampleFFI.modulemap");

    let err = build(&runner, root, BuildConfig::default()).unwrap_err();

    assert!(matches!(err, Error::MissingOutput { ref path } if path.ends_with("sampleFFI.modulemap")));
    assert!(runner.calls("cargo", "build").is_empty());
    assert!(root.join("Sources/SampleRust/include/sample.swift").exists());
}

#[test]
fn generator_failure_aborts_the_build() {
    let checkout = sample_checkout();
    let runner = FakeRunner::new().failing_on("cargo", "run");

    let err = build(&runner, checkout.path(), BuildConfig::default()).unwrap_err();

    match err {
        Error::ExternalToolFailure { action, status } => {
            assert_eq!(action, "Failed to generate C and Swift bindings");
            assert!(!status.success());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(runner.calls("cargo", "build").is_empty());
}

#[test]
fn existing_bundle_is_replaced() {
    let checkout = sample_checkout();
    let root = checkout.path();
    let stale = root.join("Sources/SampleRust/lib/SampleRust.xcframework/macos-x86_64/stale.a");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "old").unwrap();

    build(&FakeRunner::new(), root, BuildConfig::default()).unwrap();

    assert!(!stale.exists());
}

#[test]
fn cli_entry_point_finds_root_and_reads_config() {
    let checkout = sample_checkout();
    let root = checkout.path();
    fs::write(root.join("uniffi-template.json"), r#"{"bindgen_bin": "bindgen"}"#).unwrap();
    let nested = root.join("Sources/Sample");
    let runner = FakeRunner::new();

    let args = BuildArgs::parse_from(["uniffi-build", "--release", "-C", nested.to_str().unwrap()]);
    let bundle = run_build_with(&runner, &args).unwrap();

    assert_eq!(bundle, root.join("Sources/SampleRust/lib/SampleRust.xcframework"));
    let generate = runner.calls("cargo", "run").pop().unwrap();
    assert_eq!(generate.args_lossy()[2], "bindgen");
}
