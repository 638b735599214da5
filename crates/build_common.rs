// README-to-rustdoc step shared by every crate's build.rs.
// Pull it in with: include!("../build_common.rs");
//
// The including file must import:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Write the crate README to `OUT_DIR/README_GENERATED.md` so `lib.rs` can
/// use it as the crate docs.
///
/// README links point at files for repository browsing (`](src/ports/mod.rs)`);
/// the `src/` prefix and `.rs` suffix are dropped so rustdoc resolves them as
/// module paths. A crate without a README gets an empty page.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");

    let readme = fs::read_to_string(Path::new(crate_dir).join("README.md")).unwrap_or_default();
    let rustdoc = readme.replace("](src/", "](").replace(".rs)", ")");

    let out_dir = env::var("OUT_DIR").unwrap();
    fs::write(Path::new(&out_dir).join("README_GENERATED.md"), rustdoc).unwrap();
}
