use regmodel::{
    RegisterModel as _, Width,
    arch::x86::{Family, X86},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .init();

    X86::validate()?;

    for family in Family::ALL {
        let Some(&first) = family.members().first() else {
            tracing::warn!(%family, "family has no members");
            continue;
        };

        tracing::debug!(%family, widths = ?family.widths());

        let row: Vec<String> = Width::ALL
            .into_iter()
            .map(|width| match first.sibling(width) {
                Some(sibling) => format!("{:>4} ({})", sibling, width.suffix()),
                None => format!("{:>4}    ", "-"),
            })
            .collect();

        println!("{family:>3}: {}", row.join("  "));
    }

    Ok(())
}
