#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use tempfile::TempDir;
use uniffi_template_tools::error::Result;
use uniffi_template_tools::process::{Captured, CommandRunner, Invocation};
use uniffi_template_tools::tools::Tool;
use walkdir::WalkDir;

pub const SDK_LISTING: &str = r#"[
  {"canonicalName": "macosx13.3", "platform": "macosx", "platformVersion": "13.3",
   "sdkPath": "/SDKs/MacOSX13.3.sdk"},
  {"canonicalName": "macosx14.2", "platform": "macosx", "platformVersion": "14.2",
   "sdkPath": "/SDKs/MacOSX14.2.sdk"}
]"#;

/// Copies the checked-in placeholder package into a fresh temporary directory.
pub fn placeholder_checkout() -> TempDir {
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/placeholder");
    let temp_dir = TempDir::new().unwrap();
    copy_tree(&fixture, temp_dir.path());
    temp_dir
}

/// Copies the placeholder package into `name` inside a fresh temporary directory.
pub fn placeholder_checkout_in(name: &str) -> (TempDir, PathBuf) {
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/placeholder");
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join(name);
    copy_tree(&fixture, &root);
    (temp_dir, root)
}

pub fn copy_tree(from: &Path, to: &Path) {
    for entry in WalkDir::new(from).into_iter().filter_map(|e| e.ok()) {
        let rel = entry.path().strip_prefix(from).unwrap();
        let dest = to.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).unwrap();
        } else {
            fs::copy(entry.path(), &dest).unwrap();
        }
    }
}

/// Relative path and content of every file under `root`, sorted.
pub fn snapshot(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut files: Vec<_> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            (e.path().strip_prefix(root).unwrap().to_path_buf(), fs::read(e.path()).unwrap())
        })
        .collect();
    files.sort();
    files
}

/// Files under `root` whose path or content mentions `needle`.
pub fn files_mentioning(root: &Path, needle: &str) -> Vec<PathBuf> {
    snapshot(root)
        .into_iter()
        .filter(|(path, content)| {
            path.to_string_lossy().contains(needle)
                || String::from_utf8_lossy(content).contains(needle)
        })
        .map(|(path, _)| path)
        .collect()
}

#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

/// Records every invocation and imitates the side effects of the real tools.
pub struct FakeRunner {
    pub invocations: RefCell<Vec<Invocation>>,
    pub missing_tools: HashSet<&'static str>,
    pub installed_targets: Vec<String>,
    /// Generator output file name that is not written.
    pub skipped_output: Option<String>,
    /// Program and first argument of an invocation that exits with 1.
    pub failing: Option<(String, String)>,
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self {
            invocations: RefCell::new(Vec::new()),
            missing_tools: HashSet::new(),
            installed_targets: vec![
                "aarch64-apple-darwin".to_string(),
                "x86_64-apple-darwin".to_string(),
            ],
            skipped_output: None,
            failing: None,
        }
    }
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_tool(mut self, command: &'static str) -> Self {
        self.missing_tools.insert(command);
        self
    }

    pub fn with_installed_targets(mut self, targets: &[&str]) -> Self {
        self.installed_targets = targets.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn skipping_output(mut self, file_name: &str) -> Self {
        self.skipped_output = Some(file_name.to_string());
        self
    }

    pub fn failing_on(mut self, program: &str, first_arg: &str) -> Self {
        self.failing = Some((program.to_string(), first_arg.to_string()));
        self
    }

    pub fn recorded(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// Invocations of `program` whose first argument is `first_arg`.
    pub fn calls(&self, program: &str, first_arg: &str) -> Vec<Invocation> {
        self.recorded()
            .into_iter()
            .filter(|i| i.program() == program && i.args_lossy().first().map(String::as_str) == Some(first_arg))
            .collect()
    }

    fn record(&self, invocation: &Invocation) {
        self.invocations.borrow_mut().push(invocation.clone());
    }

    fn should_fail(&self, invocation: &Invocation) -> bool {
        match &self.failing {
            Some((program, first_arg)) => {
                invocation.program() == program
                    && invocation.args_lossy().first() == Some(first_arg)
            }
            None => false,
        }
    }

    fn simulate(&self, invocation: &Invocation) {
        let args = invocation.args_lossy();
        let cwd = invocation.get_current_dir().map(Path::to_path_buf).unwrap_or_default();
        match (invocation.program(), args.first().map(String::as_str)) {
            ("cargo", Some("run")) => self.generate_bindings(&args),
            ("cargo", Some("build")) => {
                let mut dir = cwd.join("target");
                if let Some(pos) = args.iter().position(|a| a == "--target") {
                    dir.push(&args[pos + 1]);
                }
                dir.push(if args.iter().any(|a| a == "--release") { "release" } else { "debug" });
                let lib = dir.join(format!("lib{}.a", udl_stem(&cwd)));
                write(&lib, "static library");
            }
            ("lipo", _) => {
                let pos = args.iter().position(|a| a == "-output").unwrap();
                write(Path::new(&args[pos + 1]), "universal library");
            }
            ("xcrun", Some("xcodebuild")) if args.iter().any(|a| a == "-create-xcframework") => {
                let pos = args.iter().position(|a| a == "-output").unwrap();
                write(&Path::new(&args[pos + 1]).join("Info.plist"), "<plist/>");
            }
            _ => {}
        }
    }

    fn generate_bindings(&self, args: &[String]) {
        let pos = args.iter().position(|a| a == "--out-dir").unwrap();
        let out_dir = PathBuf::from(&args[pos + 1]);
        let snake = Path::new(&args[pos + 2]).file_stem().unwrap().to_string_lossy().into_owned();
        let ffi = format!("{snake}FFI");

        let outputs = [
            (format!("{snake}.swift"), format!("#if canImport({ffi})\nimport {ffi}\n#endif\n")),
            (format!("{ffi}.h"), format!("// {ffi}.h\nint32_t {ffi}_add(int32_t a, int32_t b);\n")),
            (
                format!("{ffi}.modulemap"),
                format!("module {ffi} {{\n    header \"{ffi}.h\"\n    export *\n}}\n"),
            ),
        ];
        for (name, content) in outputs {
            if self.skipped_output.as_deref() != Some(name.as_str()) {
                write(&out_dir.join(name), &content);
            }
        }
    }

    fn answer(&self, invocation: &Invocation) -> String {
        let args = invocation.args_lossy();
        match invocation.program() {
            "swift" if args.first().map(String::as_str) == Some("package") => {
                let manifest = invocation.get_current_dir().unwrap().join("Package.swift");
                format!(r#"{{"name": "{}", "products": []}}"#, manifest_name(&manifest))
            }
            "rustup" => self.installed_targets.join("\n") + "\n",
            "xcrun" => SDK_LISTING.to_string(),
            other => panic!("unexpected capture of {other}"),
        }
    }
}

impl CommandRunner for FakeRunner {
    fn is_available(&self, tool: &Tool) -> bool {
        !self.missing_tools.contains(tool.command)
    }

    fn run(&self, invocation: &Invocation) -> Result<ExitStatus> {
        self.record(invocation);
        if self.should_fail(invocation) {
            return Ok(exit_status(1));
        }
        self.simulate(invocation);
        Ok(exit_status(0))
    }

    fn capture(&self, invocation: &Invocation) -> Result<Captured> {
        self.record(invocation);
        if self.should_fail(invocation) {
            return Ok(Captured { status: exit_status(1), stdout: String::new() });
        }
        Ok(Captured { status: exit_status(0), stdout: self.answer(invocation) })
    }
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Stem of the interface-definition file in the cargo package at `cargo_dir`.
fn udl_stem(cargo_dir: &Path) -> String {
    fs::read_dir(cargo_dir.join("src"))
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .find(|p| p.extension().is_some_and(|ext| ext == "udl"))
        .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap()
}

/// Package name declared in a manifest, as `dump-package` would report it.
fn manifest_name(manifest: &Path) -> String {
    let content = fs::read_to_string(manifest).unwrap();
    let start = content.find("name: \"").unwrap() + "name: \"".len();
    let end = content[start..].find('"').unwrap();
    content[start..start + end].to_string()
}
