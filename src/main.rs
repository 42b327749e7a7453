mod catalog;
mod config;
mod error;
mod fixture;
mod generate;
mod library;
mod runtime;
mod tags;

#[cfg(test)]
mod test_support;

use catalog::CATALOG;
use generate::generate;
use tags::Id3v2Writer;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::init_tracing();
    let settings = runtime::load_settings()?;

    let summary = generate(&settings.paths, CATALOG, &Id3v2Writer)?;

    if settings.verify.enabled {
        let checked = library::verify(&summary.destination, CATALOG)?;
        info!(checked, "generated library matches catalog");
    }

    println!("{summary}");
    Ok(())
}
