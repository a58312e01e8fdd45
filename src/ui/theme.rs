use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border: Color,
    pub selected_bg: Color,
    pub title: Color,     // Yellow
    pub heading: Color,   // Mauve
    pub type_name: Color, // Cyan for type names
    pub preprocessor: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),  // Blue for keywords
    string: Color::Rgb(250, 179, 135),   // Orange for strings
    number: Color::Rgb(250, 179, 135),   // Orange for numbers
    border: Color::Rgb(148, 226, 213),   // Teal frame, like the old box drawing
    selected_bg: Color::Rgb(50, 50, 70), // Slightly lighter BG for the highlighted row
    title: Color::Rgb(249, 226, 175),
    heading: Color::Rgb(203, 166, 247),
    type_name: Color::Rgb(148, 226, 213),
    preprocessor: Color::Rgb(245, 194, 231), // Pink for #include and friends
};
