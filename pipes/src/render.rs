use std::io::{self, Write};

use crate::Height;

pub const PIPE: u8 = b'#';
pub const WATER: u8 = b'~';
pub const AIR: u8 = b' ';

/// Draws the profile row by row, from the tallest pipe down to level 1.
pub fn render<W>(heights: &[Height], out: &mut W) -> io::Result<()>
where
    W: ?Sized + Write,
{
    let Some(&max) = heights.iter().max() else {
        return Ok(());
    };

    let mut row = Vec::with_capacity(heights.len() + 1);

    for level in (1..=max).rev() {
        row.clear();
        let mut last_wall = None;

        for (x, &height) in heights.iter().enumerate() {
            if height >= level {
                if let Some(wall) = last_wall {
                    row[wall + 1..x].fill(WATER);
                }
                row.push(PIPE);
                last_wall = Some(x);
            } else {
                row.push(AIR);
            }
        }

        row.push(b'\n');
        out.write_all(&row)?;
    }

    Ok(())
}
