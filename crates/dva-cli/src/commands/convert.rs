//! Calculator commands

use crate::format::grouped;
use std::io::Write;
use volume_engine::{convert_str, UnitKind, VolumeUnit};

/// Decimals shown for a volume unit
pub(crate) fn decimals(unit: VolumeUnit) -> usize {
    match unit {
        VolumeUnit::In3 => 3,
        _ => 2,
    }
}

/// `dva convert`
pub fn convert(weight: f64, unit: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let reading = convert_str(weight, unit)?;

    writeln!(out, "{} {} of water displaces:", grouped(weight, 2), unit)?;
    for target in VolumeUnit::ALL {
        writeln!(
            out,
            "  {:<18} {:>20} {}",
            target.name(),
            grouped(reading.get(target), decimals(target)),
            target.symbol()
        )?;
    }
    Ok(())
}

/// `dva units`
pub fn units(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Water density at 4°C: 1 g/mL")?;
    write!(out, "{:<10}", "unit")?;
    for target in VolumeUnit::ALL {
        write!(out, " {:>14}", format!("{} per unit", target.symbol()))?;
    }
    writeln!(out)?;

    for unit in UnitKind::ALL {
        let factors = unit.factors();
        write!(out, "{:<10}", unit)?;
        for target in VolumeUnit::ALL {
            write!(out, " {:>14}", factors.get(target))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_convert_output() {
        let text = output(|out| convert(150.0, "grams", out));
        assert!(text.contains("150.00 grams"));
        assert!(text.contains("150,000.00 mm³"));
        assert!(text.contains("150.00 cm³"));
        assert!(text.contains("9.154 in³"));
    }

    #[test]
    fn test_convert_invalid_unit() {
        let mut buf = Vec::new();
        let err = convert(1.0, "stone", &mut buf).unwrap_err();
        assert!(err.to_string().contains("Invalid unit 'stone'"));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_convert_negative_weight() {
        let mut buf = Vec::new();
        assert!(convert(-1.0, "grams", &mut buf).is_err());
    }

    #[test]
    fn test_units_table() {
        let text = output(|out| units(out));
        assert!(text.contains("ounces"));
        assert!(text.contains("28316.8466"));
        assert!(text.contains("61.023744"));
        assert_eq!(text.lines().count(), 6);
    }
}
