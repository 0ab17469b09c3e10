#[test]
fn doran_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/doran_error_pass.rs");
    t.compile_fail("tests/ui/*_fail.rs");
}
