use heck::{ToKebabCase, ToUpperCamelCase};
use lazy_static::lazy_static;
use regex::Regex;

/// Marker keyword appended to every generated package manifest.
pub const KEYWORD_TAG: &str = "alfresco-component";

/// Optional components of the scaffolded application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub navigation_bar: bool,
    pub drawer: bool,
    pub search_bar: bool,
    pub content_page: bool,
    pub bpm_task_page: bool,
}

impl Features {
    pub fn all() -> Self {
        Features {
            navigation_bar: true,
            drawer: true,
            search_bar: true,
            content_page: true,
            bpm_task_page: true,
        }
    }

    pub fn none() -> Self {
        Features {
            navigation_bar: false,
            drawer: false,
            search_bar: false,
            content_page: false,
            bpm_task_page: false,
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Features::all()
    }
}

/// Answers collected from the user, filled in stage by stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub project_name: String,
    pub description: String,
    pub author_name: String,
    pub author_email: String,
    pub author_url: String,
    pub keywords: Vec<String>,
    pub github_account: Option<String>,
    pub features: Features,
}

impl Answers {
    /// Capitalized camel case form of the project name, e.g. `AppFake`.
    pub fn project_name_camel_case(&self) -> String {
        self.project_name.to_upper_camel_case()
    }

    /// Keywords with the marker tag appended.
    pub fn manifest_keywords(&self) -> Vec<String> {
        let mut keywords = self.keywords.clone();
        keywords.push(KEYWORD_TAG.to_owned());
        keywords
    }
}

/// Normalizes a project name to a dash separated lowercase token.
///
/// Letters and digits form separate words, so `angular2App` becomes
/// `angular-2-app`.
pub fn make_app_name(name: &str) -> String {
    lazy_static! {
        static ref LETTER_DIGIT: Regex = Regex::new(r"(\p{L})(\p{N})").unwrap();
        static ref DIGIT_LETTER: Regex = Regex::new(r"(\p{N})(\p{L})").unwrap();
    }

    let spaced = LETTER_DIGIT.replace_all(name, "${1} ${2}");
    let spaced = DIGIT_LETTER.replace_all(&spaced, "${1} ${2}");
    spaced.to_kebab_case()
}

/// Splits a comma separated keyword list, dropping empty entries.
pub fn split_keywords(input: &str) -> Vec<String> {
    lazy_static! {
        static ref SEPARATOR: Regex = Regex::new(r"\s*,\s*").unwrap();
    }

    SEPARATOR
        .split(input.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_owned())
        .collect()
}

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_REGEX: Regex = Regex::new(
            r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#
        )
        .unwrap();
    }

    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_app_names() {
        assert_eq!(make_app_name("app-fake"), "app-fake");
        assert_eq!(make_app_name("My Awesome App"), "my-awesome-app");
        assert_eq!(make_app_name("myAwesomeApp"), "my-awesome-app");
        assert_eq!(make_app_name("__my_app__"), "my-app");
    }

    #[test]
    fn separates_digits_from_letters() {
        assert_eq!(make_app_name("angular2App"), "angular-2-app");
        assert_eq!(make_app_name("app2"), "app-2");
        assert_eq!(make_app_name("3d viewer"), "3-d-viewer");
        assert_eq!(make_app_name("v12"), "v-12");
    }

    #[test]
    fn normalization_is_stable() {
        let once = make_app_name("Some Project_Name2");
        assert_eq!(make_app_name(&once), once);
    }

    #[test]
    fn builds_camel_case_project_name() {
        let answers = Answers {
            project_name: "app-fake".to_owned(),
            ..Default::default()
        };
        assert_eq!(answers.project_name_camel_case(), "AppFake");
    }

    #[test]
    fn splits_keywords() {
        assert_eq!(
            split_keywords("app-keyword , angular2-keyword,alfresco"),
            vec!["app-keyword", "angular2-keyword", "alfresco"]
        );
    }

    #[test]
    fn splits_empty_keywords() {
        assert!(split_keywords("").is_empty());
        assert!(split_keywords("  ").is_empty());
        assert_eq!(split_keywords("one,,two"), vec!["one", "two"]);
    }

    #[test]
    fn appends_keyword_tag() {
        let answers = Answers {
            keywords: vec!["app-keyword".to_owned()],
            ..Default::default()
        };
        assert_eq!(
            answers.manifest_keywords(),
            vec!["app-keyword", "alfresco-component"]
        );
        assert_eq!(answers.keywords, vec!["app-keyword"]);
    }

    #[test]
    fn validates_emails() {
        assert!(is_valid_email("Sonikku.Hejjihoggu@alfresco.com"));
        assert!(is_valid_email("dev@[127.0.0.1]"));
        assert!(is_valid_email("\"john doe\"@example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("a b@example.com"));
    }

    #[test]
    fn features_default_to_enabled() {
        assert_eq!(Features::default(), Features::all());
    }
}
