fn main() {
    uniffi::generate_scaffolding("src/uniffi_template.udl").unwrap();
}
