use ufmt::{uWrite, uwrite};

use crate::rendering::CharacterDisplay;

/// A display bound as a ufmt writer, so `uwrite!` can print straight to it
pub struct BoundDisplay<'a, L> {
    pub display: &'a mut L,
}

impl<L: CharacterDisplay> uWrite for BoundDisplay<'_, L> {
    type Error = core::convert::Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.display.write_str(s);
        Ok(())
    }
}

/// Writes a float with a fixed number of decimal places, rounding half up
/// Negative values keep their sign even when they round to zero
/// param w: writer
/// param value: number to print
/// param decimals: digits after the point (0..=4)
pub fn write_fixed<W: uWrite>(w: &mut W, value: f32, decimals: u8) -> Result<(), W::Error> {
    let decimals = decimals.min(4);
    let scale = 10u32.pow(decimals as u32);

    let magnitude = if value < 0.0 {
        w.write_str("-")?;
        -value
    } else {
        value
    };
    // `as` saturates, which is fine for anything an ADC can produce
    let scaled = (magnitude * scale as f32 + 0.5) as u32;

    uwrite!(w, "{}", scaled / scale)?;
    if decimals == 0 {
        return Ok(());
    }
    w.write_str(".")?;

    let fraction = scaled % scale;
    let mut divisor = scale / 10;
    while divisor > 0 {
        uwrite!(w, "{}", (fraction / divisor) % 10)?;
        divisor /= 10;
    }
    Ok(())
}
