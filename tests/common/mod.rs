use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes a stock CSV: items as (name, price, stock), coins as
/// (denomination, count).
pub fn write_stock_csv(
    path: &Path,
    items: &[(&str, &str, u32)],
    coins: &[(&str, u32)],
) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["kind", "name", "price", "count"])?;
    for (name, price, stock) in items {
        wtr.write_record(["item", name, price, &stock.to_string()])?;
    }
    for (value, count) in coins {
        wtr.write_record(["coin", value, "", &count.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
