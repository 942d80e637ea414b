/// What Enter does while the shared text field has focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSubmit {
    Add,
    Search,
}

impl InputSubmit {
    pub fn title(self) -> &'static str {
        match self {
            Self::Add => " Add a dog ",
            Self::Search => " Search dogs ",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    List,
    Input { submit: InputSubmit },
}

impl AppMode {
    /// Returns the `(key, description)` hints shown in the footer.
    pub fn keybindings(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::List => &[
                ("q", "quit"),
                ("/", "search"),
                ("a", "add"),
                ("f", "favorite"),
                ("d", "delete"),
                ("c", "clear search"),
                ("j/k", "nav"),
            ],
            Self::Input {
                submit: InputSubmit::Add,
            } => &[("Enter", "add"), ("Esc", "back")],
            Self::Input {
                submit: InputSubmit::Search,
            } => &[("Enter", "search"), ("Esc", "back")],
        }
    }
}
