use iced::keyboard;
use iced::widget::{column, container, image, text};
use iced::{Alignment, Color, Element, Length, Subscription, Task, Theme};
use rand::Rng;

// Declare the application modules
mod api;
mod query;
mod state;

use api::client::ApiClient;
use query::FetchPlan;
use state::viewer::{Display, ImageSource, ViewState};

/// Inclusive range the Spacebar picks a random image index from
const RANDOM_INDEX_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

/// Main application state
struct ImageViewer {
    /// Client for the remote images API
    client: ApiClient,
    /// The three observable slots the renderer projects from
    view: ViewState,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Spacebar was pressed: fetch a random image
    RandomImage,
    /// A fetch task finished, successfully or not
    FetchComplete(Result<ImageSource, String>),
}

impl ImageViewer {
    /// Create a new instance of the application
    ///
    /// The first command-line argument is read once as the launch query
    /// string and decides the initial fetch (link API beats binary fetch).
    fn new() -> (Self, Task<Message>) {
        let client = ApiClient::new(api::client::API_BASE_URL)
            .expect("Failed to initialize HTTP client.");

        let launch_query = std::env::args().nth(1).unwrap_or_default();
        let params = query::parse(&launch_query);

        let mut view = ViewState::new();
        let task = match params.plan() {
            FetchPlan::Link(index) => {
                println!("🔗 Fetching image link {} on launch", index);
                view.begin_fetch();
                Task::perform(
                    fetch_link_task(client.clone(), index),
                    Message::FetchComplete,
                )
            }
            FetchPlan::Image(index) => {
                println!("📷 Fetching image {} on launch", index);
                view.begin_fetch();
                Task::perform(
                    fetch_image_task(client.clone(), index),
                    Message::FetchComplete,
                )
            }
            FetchPlan::Idle => Task::none(),
        };

        (ImageViewer { client, view }, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RandomImage => {
                let index = random_index().to_string();
                println!("🎲 Fetching random image {}", index);

                self.view.begin_fetch();
                Task::perform(
                    fetch_image_task(self.client.clone(), index),
                    Message::FetchComplete,
                )
            }
            Message::FetchComplete(result) => {
                match &result {
                    Ok(ImageSource::Local(_)) => println!("✅ Image ready"),
                    Ok(ImageSource::Remote { url, .. }) => println!("✅ Image ready from {}", url),
                    Err(message) => eprintln!("⚠️  Fetch failed: {}", message),
                }

                self.view.finish(result);
                Task::none()
            }
        }
    }

    /// Build the user interface
    ///
    /// Exactly one body branch renders at a time, in priority order:
    /// loading indicator, error message, image, Spacebar prompt.
    fn view(&self) -> Element<Message> {
        let body: Element<Message> = match self.view.display() {
            Display::Loading => text("Loading image...")
                .size(20)
                .color(Color::from_rgb8(0x3B, 0x82, 0xF6))
                .into(),
            Display::Error(message) => text(format!("Error: {}", message))
                .size(20)
                .color(Color::from_rgb8(0xEF, 0x44, 0x44))
                .into(),
            Display::Image(handle) => image(handle.clone()).into(),
            Display::Prompt => text("Press the Spacebar to get a random image!")
                .size(20)
                .color(Color::from_rgb8(0x4B, 0x55, 0x63))
                .into(),
        };

        let content = column![
            text("Random Image Fetcher").size(32),
            body,
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Global keyboard subscription, registered once and independent of state
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(handle_key)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    iced::application(
        "Random Image Fetcher",
        ImageViewer::update,
        ImageViewer::view,
    )
    .subscription(ImageViewer::subscription)
    .theme(ImageViewer::theme)
    .centered()
    .run_with(ImageViewer::new)
}

/// Map a key press to a message; only an exact Space match triggers a fetch
fn handle_key(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Space) => Some(Message::RandomImage),
        _ => None,
    }
}

/// Pick a random image index within the documented inclusive range
fn random_index() -> u32 {
    rand::thread_rng().gen_range(RANDOM_INDEX_RANGE)
}

/// Fetch raw image bytes and wrap them in a widget handle.
/// Runs as a background task so the UI keeps processing events.
async fn fetch_image_task(client: ApiClient, index: String) -> Result<ImageSource, String> {
    let bytes = client
        .fetch_image_bytes(&index)
        .await
        .map_err(|e| e.to_string())?;

    Ok(ImageSource::Local(image::Handle::from_bytes(bytes)))
}

/// Ask the link API for a URL, then download it for display.
/// The URL is kept alongside the handle exactly as the API returned it.
async fn fetch_link_task(client: ApiClient, index: String) -> Result<ImageSource, String> {
    let url = client
        .fetch_image_link(&index)
        .await
        .map_err(|e| e.to_string())?;

    let bytes = client.download(&url).await.map_err(|e| e.to_string())?;

    Ok(ImageSource::Remote {
        url,
        handle: image::Handle::from_bytes(bytes),
    })
}
