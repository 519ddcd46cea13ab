use crate::blog::NewPost;
use crate::error::BlogError;
use crate::state::SharedState;
use crate::store::PostStore;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// The field was submitted more than once
    Repeated(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub title: Option<FieldValue>,
    pub slug: Option<FieldValue>,
    pub markdown: Option<FieldValue>,
}

/// One message slot per field, `None` where the field was fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<&'static str>,
    pub slug: Option<&'static str>,
    pub markdown: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Rejected(FieldErrors),
    Redirect(&'static str),
}

impl FieldValue {
    fn push(self, value: String) -> FieldValue {
        match self {
            FieldValue::Text(first) => FieldValue::Repeated(vec![first, value]),
            FieldValue::Repeated(mut values) => {
                values.push(value);
                FieldValue::Repeated(values)
            }
        }
    }

    fn first(&self) -> &str {
        match self {
            FieldValue::Text(value) => value,
            FieldValue::Repeated(values) => values.first().map_or("", String::as_str),
        }
    }
}

impl Submission {
    /// Collects form pairs, ignoring fields other than title, slug and markdown.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Submission {
        let mut submission = Submission::default();
        for (name, value) in pairs {
            let field = match name.as_str() {
                "title" => &mut submission.title,
                "slug" => &mut submission.slug,
                "markdown" => &mut submission.markdown,
                _ => continue,
            };
            *field = Some(match field.take() {
                None => FieldValue::Text(value),
                Some(existing) => existing.push(value),
            });
        }
        submission
    }

    fn errors(&self) -> FieldErrors {
        FieldErrors {
            title: is_missing(&self.title).then_some("Title is required"),
            slug: is_missing(&self.slug).then_some("Slug is required"),
            markdown: is_missing(&self.markdown).then_some("Markdown is required"),
        }
    }
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.slug.is_none() && self.markdown.is_none()
    }
}

fn is_missing(value: &Option<FieldValue>) -> bool {
    match value {
        None => true,
        Some(FieldValue::Text(text)) => text.is_empty(),
        Some(FieldValue::Repeated(_)) => false,
    }
}

fn into_text(field: &'static str, value: Option<FieldValue>) -> Result<String, BlogError> {
    match value {
        Some(FieldValue::Text(text)) => Ok(text),
        _ => Err(BlogError::TypeContractViolation { field }),
    }
}

/// Validates a submission and creates the post. The store is only touched when
/// every field is present.
///
/// Slugs aren't checked against route names: a post with slug `admin` is stored
/// but `/posts/admin` keeps serving the admin page.
pub async fn action(
    posts: &dyn PostStore,
    submission: Submission,
) -> Result<ActionOutcome, BlogError> {
    let errors = submission.errors();
    if !errors.is_empty() {
        return Ok(ActionOutcome::Rejected(errors));
    }

    let new_post = NewPost {
        title: into_text("title", submission.title)?,
        slug: into_text("slug", submission.slug)?,
        markdown: into_text("markdown", submission.markdown)?,
    };

    let post = posts.create(new_post).await?;
    tracing::info!(slug = %post.slug, "created post");

    Ok(ActionOutcome::Redirect(crate::blog::ADMIN_PATH))
}

pub(crate) async fn get() -> Html<String> {
    form_page(&Submission::default(), &FieldErrors::default())
}

pub(crate) async fn post(
    State(state): SharedState,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, BlogError> {
    let submission = Submission::from_pairs(pairs);

    match action(state.posts.as_ref(), submission.clone()).await? {
        ActionOutcome::Rejected(errors) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            form_page(&submission, &errors),
        )
            .into_response()),
        ActionOutcome::Redirect(to) => Ok(Redirect::to(to).into_response()),
    }
}

fn form_page(submission: &Submission, errors: &FieldErrors) -> Html<String> {
    fn value(field: &Option<FieldValue>) -> String {
        html_escape::encode_double_quoted_attribute(field.as_ref().map_or("", FieldValue::first))
            .into_owned()
    }
    fn error(message: Option<&str>) -> String {
        message
            .map(|message| {
                format!(
                    "<em class=\"error\">{}</em>",
                    html_escape::encode_text(message)
                )
            })
            .unwrap_or_default()
    }

    let body = format!(
        "<h1>New Post</h1>\n\
         <form method=\"post\">\n\
         <p><label>Post Title: <input type=\"text\" name=\"title\" value=\"{title}\"></label>{title_error}</p>\n\
         <p><label>Post Slug: <input type=\"text\" name=\"slug\" value=\"{slug}\"></label>{slug_error}</p>\n\
         <p><label for=\"markdown\">Markdown:</label><br>\n\
         <textarea id=\"markdown\" rows=\"8\" name=\"markdown\">{markdown}</textarea>{markdown_error}</p>\n\
         <p><button type=\"submit\">Create Post</button></p>\n\
         </form>",
        title = value(&submission.title),
        title_error = error(errors.title),
        slug = value(&submission.slug),
        slug_error = error(errors.slug),
        markdown = value(&submission.markdown),
        markdown_error = error(errors.markdown),
    );

    crate::html::page("New Post", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::RecordingStore;

    fn text(value: &str) -> Option<FieldValue> {
        Some(FieldValue::Text(value.into()))
    }

    fn full_submission() -> Submission {
        Submission {
            title: text("Hello"),
            slug: text("hello"),
            markdown: text("# Hi"),
        }
    }

    #[tokio::test]
    async fn valid_submission_creates_once_and_redirects() {
        let store = RecordingStore::default();

        let outcome = action(&store, full_submission()).await.unwrap();

        assert_eq!(outcome, ActionOutcome::Redirect("/posts/admin"));
        assert_eq!(
            store.creates(),
            [NewPost {
                title: "Hello".into(),
                slug: "hello".into(),
                markdown: "# Hi".into(),
            }]
        );
        assert!(store.read_by_slug("hello").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn missing_title_is_rejected() {
        let store = RecordingStore::default();
        let submission = Submission {
            title: None,
            ..full_submission()
        };

        let outcome = action(&store, submission).await.unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::Rejected(FieldErrors {
                title: Some("Title is required"),
                slug: None,
                markdown: None,
            })
        );
        assert!(store.creates().is_empty());
    }

    #[tokio::test]
    async fn empty_fields_count_as_missing() {
        let store = RecordingStore::default();
        let submission = Submission {
            title: text("Hello"),
            slug: text(""),
            markdown: text(""),
        };

        let outcome = action(&store, submission).await.unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::Rejected(FieldErrors {
                title: None,
                slug: Some("Slug is required"),
                markdown: Some("Markdown is required"),
            })
        );
        assert!(store.creates().is_empty());
    }

    #[tokio::test]
    async fn empty_submission_reports_every_field() {
        let store = RecordingStore::default();

        let outcome = action(&store, Submission::default()).await.unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::Rejected(FieldErrors {
                title: Some("Title is required"),
                slug: Some("Slug is required"),
                markdown: Some("Markdown is required"),
            })
        );
        assert!(store.creates().is_empty());
    }

    #[tokio::test]
    async fn repeated_field_is_a_contract_violation() {
        let store = RecordingStore::default();
        let submission = Submission::from_pairs([
            ("title".to_owned(), "One".to_owned()),
            ("title".to_owned(), "Two".to_owned()),
            ("slug".to_owned(), "one".to_owned()),
            ("markdown".to_owned(), "text".to_owned()),
        ]);

        let err = action(&store, submission).await.unwrap_err();

        assert!(matches!(
            err,
            BlogError::TypeContractViolation { field: "title" }
        ));
        assert!(store.creates().is_empty());
    }

    #[tokio::test]
    async fn repeated_field_still_reports_other_missing_fields() {
        let store = RecordingStore::default();
        let submission = Submission::from_pairs([
            ("slug".to_owned(), "a".to_owned()),
            ("slug".to_owned(), "b".to_owned()),
        ]);

        let outcome = action(&store, submission).await.unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::Rejected(FieldErrors {
                title: Some("Title is required"),
                slug: None,
                markdown: Some("Markdown is required"),
            })
        );
    }

    #[tokio::test]
    async fn duplicate_slug_surfaces_store_conflict() {
        let store = RecordingStore::default();
        action(&store, full_submission()).await.unwrap();

        let err = action(&store, full_submission()).await.unwrap_err();

        assert!(matches!(
            err,
            BlogError::Store(crate::error::StoreError::Conflict(_))
        ));
        assert_eq!(store.creates().len(), 2);
    }

    #[test]
    fn from_pairs_ignores_unknown_fields() {
        let submission = Submission::from_pairs([
            ("title".to_owned(), "T".to_owned()),
            ("intent".to_owned(), "create".to_owned()),
        ]);

        assert_eq!(
            submission,
            Submission {
                title: text("T"),
                ..Submission::default()
            }
        );
    }

    #[test]
    fn form_shows_errors_and_escaped_values() {
        let submission = Submission {
            title: text(r#"say "hi" & go"#),
            ..Submission::default()
        };
        let Html(html) = form_page(&submission, &submission.errors());

        assert!(
            html.contains(r#"value="say &quot;hi&quot; &amp; go""#),
            "{html}"
        );
        assert!(!html.contains("Title is required"));
        assert!(html.contains("Slug is required"));
        assert!(html.contains("Markdown is required"));
    }
}
