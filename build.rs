use std::{env, fs::File, io::Write, path::Path};

const DEFAULT_MAX_TREE_HEIGHT: usize = 20;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("No out dir");
    let dest_path = Path::new(&out_dir).join("constants.rs");
    let mut f = File::create(&dest_path).expect("Could not create file");

    let max_tree_height = env::var("MSS_MAX_TREE_HEIGHT")
        .ok()
        .map_or(Ok(DEFAULT_MAX_TREE_HEIGHT), |value| value.parse())
        .expect("Could not parse MSS_MAX_TREE_HEIGHT");

    // Leaf indices are u32 and construction runs a stack of height H + 1.
    assert!(
        (2..=30).contains(&max_tree_height),
        "MSS_MAX_TREE_HEIGHT must be in 2..=30"
    );

    write!(
        &mut f,
        "pub const MAX_TREE_HEIGHT: usize = {};",
        max_tree_height
    )
    .expect("Could not write file");
    println!("cargo:rerun-if-env-changed=MSS_MAX_TREE_HEIGHT");
}
