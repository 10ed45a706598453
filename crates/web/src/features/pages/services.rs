use serde::Serialize;
use serde_json::{Value, json};
use storage::{
    ContentStore, RegistrationStore,
    error::Result,
    models::{BlogPost, EventListing, Stored},
};
use utoipa::ToSchema;

const HOME_EVENT_COUNT: usize = 3;
const HOME_SPEAKER_COUNT: usize = 4;
const HOME_POST_COUNT: usize = 3;

/// Site pages served by the frontend router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Events,
    Speakers,
    Blog,
    BlogPost(i64),
    Sponsors,
    Register,
    Contact,
}

impl Page {
    /// Maps a site path such as `/blog/3` to its page.
    pub fn resolve(path: &str) -> Option<Self> {
        let trimmed = path.trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            [] | ["home"] => Some(Self::Home),
            ["events"] => Some(Self::Events),
            ["speakers"] => Some(Self::Speakers),
            ["blog"] => Some(Self::Blog),
            ["blog", id] => id.parse().ok().map(Self::BlogPost),
            ["sponsors"] => Some(Self::Sponsors),
            ["register"] => Some(Self::Register),
            ["contact"] => Some(Self::Contact),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Events => "events",
            Self::Speakers => "speakers",
            Self::Blog => "blog",
            Self::BlogPost(_) => "blog_post",
            Self::Sponsors => "sponsors",
            Self::Register => "register",
            Self::Contact => "contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Events => "Events",
            Self::Speakers => "Speakers",
            Self::Blog | Self::BlogPost(_) => "Blog",
            Self::Sponsors => "Sponsors",
            Self::Register => "Register your school",
            Self::Contact => "Contact us",
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PageView {
    pub page: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[schema(value_type = Object)]
    pub content: Value,
}

pub async fn render(
    page: Page,
    content: &ContentStore,
    registrations: &dyn RegistrationStore,
) -> Result<PageView> {
    let body = match page {
        Page::Home => {
            let events = upcoming_events(content).await;
            let speakers = content.speakers.list().await;
            let posts = newest_posts(content).await;
            json!({
                "events": events.into_iter().take(HOME_EVENT_COUNT).collect::<Vec<_>>(),
                "speakers": speakers.into_iter().take(HOME_SPEAKER_COUNT).collect::<Vec<_>>(),
                "posts": posts.into_iter().take(HOME_POST_COUNT).collect::<Vec<_>>(),
                "sponsors": content.sponsors.list().await,
            })
        }
        Page::Events => json!({
            "events": upcoming_events(content).await,
            "festival_events": registrations.list_festival_events().await?,
        }),
        Page::Speakers => json!({ "speakers": content.speakers.list().await }),
        Page::Blog => json!({ "posts": newest_posts(content).await }),
        Page::BlogPost(id) => json!({ "post": content.blogs.get(id).await? }),
        Page::Sponsors => json!({ "sponsors": content.sponsors.list().await }),
        Page::Register => json!({
            "steps": ["school", "coordinator", "participants"],
            "festival_events": registrations.list_festival_events().await?,
        }),
        Page::Contact => json!({ "fields": ["name", "email", "subject", "message"] }),
    };

    let id = match page {
        Page::BlogPost(id) => Some(id),
        _ => None,
    };

    Ok(PageView {
        page: page.key().to_string(),
        id,
        title: page.title().to_string(),
        content: body,
    })
}

/// Events ordered by date; undated events last.
async fn upcoming_events(content: &ContentStore) -> Vec<Stored<EventListing>> {
    let mut events = content.events.list().await;
    events.sort_by_key(|e| (e.data.date.is_none(), e.data.date, e.id));
    events
}

/// Posts newest first by publication date, then by id.
async fn newest_posts(content: &ContentStore) -> Vec<Stored<BlogPost>> {
    let mut posts = content.blogs.list().await;
    posts.sort_by(|a, b| {
        b.data
            .published_on
            .cmp(&a.data.published_on)
            .then(b.id.cmp(&a.id))
    });
    posts
}
