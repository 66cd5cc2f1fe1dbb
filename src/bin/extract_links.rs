use repo_utils::cli::{parse_or_exit, ExtractLinksCli};
use repo_utils::links::{extract_links, write_tsv};
use repo_utils::logging;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    logging::init("warn");

    let cli: ExtractLinksCli = parse_or_exit();

    let links = extract_links(&cli.html_file)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_tsv(&links, &mut out)?;
    out.flush()?;

    Ok(())
}
