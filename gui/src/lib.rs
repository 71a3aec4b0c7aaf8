use analysis_client::AnalysisClient;
use iced::widget::{button, column, container, scrollable, text, text_input, Column};
use iced::{Command, Element, Length, Theme};
use redditboss_core::{ErrorExt, Opportunity};
use tracing::{debug, error, info};

const EMPTY_INPUT_MESSAGE: &str = "Please enter a URL or paste your content.";
const INPUT_PLACEHOLDER: &str = "Enter your article URL or paste your content here...";

#[derive(Debug, Clone)]
pub enum Message {
    ContentChanged(String),
    FindOpportunities,
    AnalysisFinished(Result<Vec<Opportunity>, String>),
    OpenPost(String),
}

/// The opportunity finder view. Owns the submitted content, the result
/// list, and the loading/error flags; `loading` and `error` are never both
/// set once an attempt has settled.
pub struct App {
    client: AnalysisClient,
    content: String,
    opportunities: Vec<Opportunity>,
    loading: bool,
    error: Option<String>,
}

impl App {
    pub fn new(client: AnalysisClient) -> Self {
        Self {
            client,
            content: String::new(),
            opportunities: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::ContentChanged(content) => {
                self.content = content;
                Command::none()
            }
            Message::FindOpportunities => {
                if self.content.is_empty() {
                    self.error = Some(EMPTY_INPUT_MESSAGE.to_string());
                    return Command::none();
                }

                info!("Submitting content for analysis");
                self.loading = true;
                self.error = None;
                self.opportunities.clear();

                let client = self.client.clone();
                let content = self.content.clone();
                Command::perform(
                    async move {
                        client
                            .analyze_content(&content)
                            .await
                            .map_err(|e| e.log_error().to_string())
                    },
                    Message::AnalysisFinished,
                )
            }
            Message::AnalysisFinished(result) => {
                self.loading = false;
                match result {
                    Ok(opportunities) => {
                        info!("Analysis finished with {} opportunities", opportunities.len());
                        self.opportunities = opportunities;
                    }
                    Err(message) => {
                        self.error = Some(message);
                    }
                }
                Command::none()
            }
            Message::OpenPost(url) => {
                debug!("Opening post in browser: {}", url);
                if let Err(e) = webbrowser::open(&url) {
                    error!("Failed to open browser for {}: {}", url, e);
                }
                Command::none()
            }
        }
    }

    pub fn view(&self) -> Element<Message, Theme> {
        let header: Element<Message, Theme> = column![
            text("RedditBoss").size(32),
            text("Your Smart Engagement Assistant").size(16)
        ]
        .spacing(5)
        .into();

        let submit_label = if self.loading {
            "Finding..."
        } else {
            "Find Opportunities"
        };
        let mut submit = button(text(submit_label)).padding(10);
        if !self.loading {
            submit = submit.on_press(Message::FindOpportunities);
        }

        let search: Element<Message, Theme> = column![
            text_input(INPUT_PLACEHOLDER, &self.content)
                .on_input(Message::ContentChanged)
                .padding(10),
            submit
        ]
        .spacing(10)
        .into();

        let mut page = Column::new().spacing(20).push(header).push(search);

        if let Some(error) = &self.error {
            page = page.push(text(format!("Error: {error}")).size(14));
        }

        if self.loading {
            page = page.push(text("Analyzing your content and searching Reddit...").size(14));
        }

        let mut post_list = Column::new().spacing(10);
        for opportunity in &self.opportunities {
            post_list = post_list.push(view_opportunity(opportunity));
        }
        page = page.push(scrollable(post_list).height(Length::Fill));

        container(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into()
    }
}

fn view_opportunity(opportunity: &Opportunity) -> Element<Message, Theme> {
    container(
        column![
            text(&opportunity.title).size(16),
            text(format!("r/{}", opportunity.subreddit)).size(12),
            text("AI-Generated Comment:").size(14),
            text(&opportunity.comment_suggestion).size(14),
            button("View Post on Reddit").on_press(Message::OpenPost(opportunity.url.clone()))
        ]
        .spacing(5),
    )
    .padding(10)
    .into()
}
