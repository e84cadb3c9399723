// ============================================================================
// Basic Usage Example
// ============================================================================

use precise_number::prelude::*;

fn main() -> Result<(), NumericError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Precise Number Example ===\n");

    // Text input is kept verbatim
    let price = NumericValue::parse("99.7500")?;
    let fee = NumericValue::parse("0.25")?;
    println!("price = {price}, fee = {fee}");

    // First arithmetic call selects the engine
    let total = price.add(&fee)?;
    println!("total = {total}");
    println!(
        "engine = {}",
        EngineSelector::global()
            .selected_name()
            .unwrap_or_else(|| "none".to_string())
    );

    let third = NumericValue::from_int(1).divide(&NumericValue::from_int(3))?;
    println!("1 / 3 = {third}");

    // Same operation on the float fallback
    let native = EngineSelector::new(EngineConfig::native_only())?;
    let sum = NumericValue::parse("0.1")?.add_using(&NumericValue::parse("0.2")?, &native)?;
    println!("0.1 + 0.2 (native) = {sum}");

    // Locale-formatted input
    println!("\nParsing Dutch-formatted amounts...");
    let parser = LocaleNumberParser::from_locale(&NumberFormat::nl_nl());
    for input in ["EUR -1.250,75", "2.500,75-", "1.250,-", "0,000017 BTC"] {
        let amount = parser.parse(input)?;
        println!(
            "  {input:>15} -> {amount:<12} -> {}",
            amount.format_localized(2, &NumberFormat::nl_nl())
        );
    }

    match total.divide(&NumericValue::zero()) {
        Ok(value) => println!("unexpected: {value}"),
        Err(err) => println!("\nDivision by zero rejected: {err}"),
    }

    Ok(())
}
