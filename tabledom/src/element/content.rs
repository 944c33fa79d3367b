#[derive(Default, Clone)]
pub enum Content {
    #[default]
    None,
    Text(String),
    /// Editable control holding its current value.
    Input { value: String },
    Children(Vec<super::Element>),
}

impl std::fmt::Debug for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Text(s) => write!(f, "Text({s:?})"),
            Self::Input { value } => write!(f, "Input({value:?})"),
            Self::Children(c) => write!(f, "Children({c:?})"),
        }
    }
}
