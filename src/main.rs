use analysis_client::AnalysisClient;
use gui::App;
use iced::{Application, Settings};
use redditboss_core::{AppConfig, CoreError};

#[tokio::main]
async fn main() -> Result<(), CoreError> {
    tracing_subscriber::fmt()
        .with_env_filter("redditboss=debug,gui=debug,analysis_client=debug,redditboss_core=debug")
        .init();

    tracing::info!("Starting RedditBoss - Smart Engagement Assistant");

    let config = AppConfig::load()?;
    let client = AnalysisClient::new(&config)?;

    let mut settings = Settings::with_flags(client);
    settings.window = iced::window::Settings {
        size: iced::Size::new(900.0, 760.0),
        min_size: Some(iced::Size::new(640.0, 520.0)),
        ..Default::default()
    };

    RedditBossApp::run(settings).map_err(|e| {
        tracing::error!("Application error: {}", e);
        CoreError::Internal {
            message: format!("GUI error: {e}"),
        }
    })
}

struct RedditBossApp {
    app: App,
}

impl Application for RedditBossApp {
    type Message = gui::Message;
    type Theme = iced::Theme;
    type Executor = iced::executor::Default;
    type Flags = AnalysisClient;

    fn new(flags: Self::Flags) -> (Self, iced::Command<Self::Message>) {
        tracing::info!("Initializing application");
        (
            Self {
                app: App::new(flags),
            },
            iced::Command::none(),
        )
    }

    fn title(&self) -> String {
        "RedditBoss - Smart Engagement Assistant".to_string()
    }

    fn update(&mut self, message: Self::Message) -> iced::Command<Self::Message> {
        self.app.update(message)
    }

    fn view(&self) -> iced::Element<Self::Message> {
        self.app.view()
    }
}
