//! ZSA Moonlander physical layout.

/// Number of physical keys.
pub const KEY_COUNT: usize = 72;

/// Layout template: one `{}` per physical key, laid out like the board.
///
/// Rows of the template define the grid shape every layer grid must match.
pub const LAYOUT_TEMPLATE: &str = "
        {}, {}, {}, {}, {}, {}, {},           {}, {}, {}, {}, {}, {}, {},
        {}, {}, {}, {}, {}, {}, {},           {}, {}, {}, {}, {}, {}, {},
        {}, {}, {}, {}, {}, {}, {},           {}, {}, {}, {}, {}, {}, {},
        {}, {}, {}, {}, {}, {},                   {}, {}, {}, {}, {}, {},
        {}, {}, {}, {}, {},         {},     {},       {}, {}, {}, {}, {},
                            {}, {}, {},     {}, {}, {}
";

/// LED indices in the same physical arrangement as [`LAYOUT_TEMPLATE`].
///
/// Each number is the `rgb_matrix` index of the LED under that key.
pub const LED_LAYOUT: &str = "
0 5 10 15 20 25 29         65 61 56 51 46 41 36
1 6 11 16 21 26 30         66 62 57 52 47 42 37
2 7 12 17 22 27 31         67 63 58 53 48 43 38
3 8 13 18 23 28               64 59 54 49 44 39
4 9 14 19 24    35         71    60 55 50 45 40
             32 33 34   70 69 68
";
