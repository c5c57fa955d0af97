use chrono::Datelike;

fn main() {
    // The footer prints the copyright year of the build, not of the visit
    let build_year = chrono::Utc::now().year();

    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=projects");
}
