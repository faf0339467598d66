//! Deterministic labels for tiles, colors and pixel cells
//!
//! Columns use the spreadsheet convention (`A`..`Z`, `AA`, `AB`, ...), rows
//! are 1-based numbers appended without a separator. Color labels reuse the
//! column letters on the color's first-seen index.

/// Number of letters in the label alphabet
const ALPHABET_LEN: usize = 26;

/// Prefix for color labels
pub const COLOR_LABEL_PREFIX: &str = "Color:";

/// Spreadsheet-style letters for a zero-based index
///
/// `0 -> A`, `25 -> Z`, `26 -> AA`, `27 -> AB`, `701 -> ZZ`, `702 -> AAA`.
pub fn column_letters(index: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = index;

    loop {
        let digit = (remaining % ALPHABET_LEN) as u8;
        letters.push(char::from(b'A' + digit));
        remaining /= ALPHABET_LEN;
        if remaining == 0 {
            break;
        }
        // Bijective base-26: there is no zero digit
        remaining -= 1;
    }

    letters.iter().rev().collect()
}

/// Label for a tile, e.g. `(0, 0) -> A1`, `(2, 27) -> AB3`
pub fn tile_label(tile_row: usize, tile_col: usize) -> String {
    format!("{}{}", column_letters(tile_col), tile_row + 1)
}

/// Label for the color first seen at position `order`, e.g. `0 -> Color:A`
pub fn color_label(order: usize) -> String {
    format!("{COLOR_LABEL_PREFIX}{}", column_letters(order))
}

/// Label for a pixel cell inside a tile, e.g. `A1=3:2` (1-based column:row)
pub fn cell_label(tile_row: usize, tile_col: usize, pixel_row: usize, pixel_col: usize) -> String {
    format!(
        "{}={}:{}",
        tile_label(tile_row, tile_col),
        pixel_col + 1,
        pixel_row + 1
    )
}
