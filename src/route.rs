//! Navigation between the two screens.

/// The screens the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// API key capture
    Gate,
    /// Transcription request and results
    Console,
}

/// Outcome of entering a screen: either it renders, or its guard sends the
/// user elsewhere before anything is shown.
#[derive(Debug)]
pub enum Entry<S> {
    Render(S),
    Redirect(Route),
}

impl<S> Entry<S> {
    /// The redirect target, if the guard fired.
    pub fn redirect(&self) -> Option<Route> {
        match self {
            Self::Render(_) => None,
            Self::Redirect(route) => Some(*route),
        }
    }

    /// The screen, if it rendered.
    pub fn screen(self) -> Option<S> {
        match self {
            Self::Render(screen) => Some(screen),
            Self::Redirect(_) => None,
        }
    }
}
