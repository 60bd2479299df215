/// Observable viewer state
///
/// The three slots the UI renders from: the displayed image, the loading
/// flag, and the last error message. Both fetch flows mutate this state
/// through `begin_fetch` and `finish`; the renderer only reads `display`.

use iced::widget::image;

/// Where the displayed image came from
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Raw bytes from the binary endpoint, held by the widget handle
    Local(image::Handle),
    /// A URL extracted from the link API, downloaded once for display
    Remote {
        url: String,
        handle: image::Handle,
    },
}

impl ImageSource {
    pub fn handle(&self) -> &image::Handle {
        match self {
            Self::Local(handle) => handle,
            Self::Remote { handle, .. } => handle,
        }
    }
}

/// The single mutable state record of the application
#[derive(Debug, Default)]
pub struct ViewState {
    image: Option<ImageSource>,
    loading: bool,
    error: Option<String>,
}

/// What the renderer should show, exactly one branch at a time
#[derive(Debug)]
pub enum Display<'a> {
    Loading,
    Error(&'a str),
    Image(&'a image::Handle),
    Prompt,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as outstanding.
    ///
    /// Clears a previous error but leaves the previous image in place;
    /// the image slot is only ever replaced on a successful fetch.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record the outcome of a fetch.
    ///
    /// Loading is cleared regardless of outcome, and exactly one of
    /// image/error is written. Overlapping fetches are not coordinated;
    /// the last completion wins.
    pub fn finish(&mut self, result: Result<ImageSource, String>) {
        self.loading = false;
        match result {
            Ok(source) => self.image = Some(source),
            Err(message) => self.error = Some(message),
        }
    }

    /// Project the state onto the one branch to render.
    ///
    /// Priority: loading > error > image > prompt.
    pub fn display(&self) -> Display<'_> {
        if self.loading {
            Display::Loading
        } else if let Some(message) = &self.error {
            Display::Error(message)
        } else if let Some(source) = &self.image {
            Display::Image(source.handle())
        } else {
            Display::Prompt
        }
    }
}
