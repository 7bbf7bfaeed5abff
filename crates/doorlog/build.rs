use std::fs;
use std::path::Path;

use clap::CommandFactory;

// The CLI definition is shared with the binary so the man pages always
// match `--help`.
#[path = "src/cli.rs"]
mod cli;

fn main() {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let Some(out_dir) = std::env::var_os("OUT_DIR") else {
        panic!("cargo did not set OUT_DIR for the doorlog build script");
    };
    let man_dir = Path::new(&out_dir).join("man");
    if let Err(e) = fs::create_dir_all(&man_dir) {
        panic!("cannot create {}: {e}", man_dir.display());
    }

    let doorlog = cli::Cli::command();
    write_page(&doorlog, &man_dir);
    for sub in doorlog.get_subcommands().filter(|sub| !sub.is_hide_set()) {
        // doorlog-completions.1
        let page = sub.clone().name(format!("doorlog-{}", sub.get_name()));
        write_page(&page, &man_dir);
    }
}

/// Render one section-1 page named after `cmd`.
fn write_page(cmd: &clap::Command, man_dir: &Path) {
    let target = man_dir.join(format!("{}.1", cmd.get_name()));
    let mut page = Vec::new();
    if let Err(e) = clap_mangen::Man::new(cmd.clone()).render(&mut page) {
        panic!("man page for `{}` failed to render: {e}", cmd.get_name());
    }
    if let Err(e) = fs::write(&target, page) {
        panic!("cannot write {}: {e}", target.display());
    }
}
