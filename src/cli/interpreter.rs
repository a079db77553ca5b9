//! Command interpreter
//!
//! `Interpreter::process` turns one line of user text into exactly one
//! `Response`. Opening links and downloading files go through the injected
//! capabilities; their failures are logged and never change the response.

use crate::catalog::{Catalog, EntityKind};
use crate::cli::commands::{
    Command, CommandType, StaticCommand, ABOUT_TEXT, CONTACT_TEXT, HELP_TEXT, SKILLS_TEXT,
};
use crate::config::Profile;
use crate::effects::{FileDownloader, LinkOpener};
use serde::Serialize;
use tracing::{debug, warn};

/// How a response should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    /// Neutral information
    Response,
    /// A side effect was performed
    Success,
    /// Lookup or parse failure
    Error,
}

impl ResponseKind {
    /// Style class name
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::Response => "response",
            ResponseKind::Success => "success",
            ResponseKind::Error => "error",
        }
    }
}

/// What the renderer should do with a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Render these `\n`-separated lines
    Text(String),
    /// Erase the log and render nothing
    ClearScreen,
}

/// Result of processing one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "ResponseRecord")]
pub struct Response {
    /// Style of the output
    pub kind: ResponseKind,
    /// The output itself
    pub output: Output,
}

impl Response {
    /// Neutral text response
    pub fn response(text: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Response,
            output: Output::Text(text.into()),
        }
    }

    /// Success text response
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Success,
            output: Output::Text(text.into()),
        }
    }

    /// Error text response
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Error,
            output: Output::Text(text.into()),
        }
    }

    /// Screen-clear response
    pub fn clear_screen() -> Self {
        Self {
            kind: ResponseKind::Response,
            output: Output::ClearScreen,
        }
    }

    /// Text to render, `None` for a screen clear
    pub fn text(&self) -> Option<&str> {
        match &self.output {
            Output::Text(text) => Some(text),
            Output::ClearScreen => None,
        }
    }

    /// Whether this response asks for the log to be erased
    pub fn is_clear(&self) -> bool {
        self.output == Output::ClearScreen
    }
}

/// Wire shape of a response: `{ "kind": ..., "text": ... | null }`
#[derive(Debug, Serialize)]
struct ResponseRecord {
    kind: ResponseKind,
    text: Option<String>,
}

impl From<Response> for ResponseRecord {
    fn from(response: Response) -> Self {
        let text = match response.output {
            Output::Text(text) => Some(text),
            Output::ClearScreen => None,
        };
        Self {
            kind: response.kind,
            text,
        }
    }
}

/// The terminal's command interpreter
pub struct Interpreter {
    profile: Profile,
    projects: Catalog,
    posts: Catalog,
    links: Box<dyn LinkOpener>,
    downloads: Box<dyn FileDownloader>,
}

impl Interpreter {
    /// Create an interpreter over the given catalogs and capabilities
    pub fn new(
        profile: Profile,
        projects: Catalog,
        posts: Catalog,
        links: Box<dyn LinkOpener>,
        downloads: Box<dyn FileDownloader>,
    ) -> Self {
        Self {
            profile,
            projects,
            posts,
            links,
            downloads,
        }
    }

    /// Interpreter with the levkany.com profile and catalogs
    pub fn with_defaults(links: Box<dyn LinkOpener>, downloads: Box<dyn FileDownloader>) -> Self {
        Self::new(
            Profile::default(),
            Catalog::default_projects(),
            Catalog::default_posts(),
            links,
            downloads,
        )
    }

    /// Process one line of input
    pub fn process(&self, input: &str) -> Response {
        let command = Command::parse(input);
        debug!(command = ?command.command_type, "dispatching");
        let response = self.handle_command(&command);
        debug!(kind = response.kind.as_str(), "responded");
        response
    }

    /// Handle a parsed command
    pub fn handle_command(&self, command: &Command) -> Response {
        match &command.command_type {
            CommandType::Static(cmd) => Response::response(self.run_static(*cmd)),
            CommandType::Clear => Response::clear_screen(),
            CommandType::List(kind) => Response::response(self.catalog(*kind).listing()),
            CommandType::Open { kind, id } => {
                let catalog = self.catalog(*kind);
                match catalog.get(id) {
                    Some(entity) => {
                        self.open_link(&entity.url);
                        Response::success(format!("Opening {}...", entity.name))
                    }
                    None => Response::error(kind.not_found()),
                }
            }
            CommandType::Unknown { input } => Response::error(format!(
                "Command not found: {}\nType \"help\" for available commands.",
                input
            )),
        }
    }

    /// Catalog of the given kind
    pub fn catalog(&self, kind: EntityKind) -> &Catalog {
        match kind {
            EntityKind::Project => &self.projects,
            EntityKind::Post => &self.posts,
        }
    }

    fn run_static(&self, cmd: StaticCommand) -> String {
        match cmd {
            StaticCommand::Help => HELP_TEXT.to_string(),
            StaticCommand::About => ABOUT_TEXT.to_string(),
            StaticCommand::Skills => SKILLS_TEXT.to_string(),
            StaticCommand::Contact => CONTACT_TEXT.to_string(),
            StaticCommand::Github => {
                self.open_link(&self.profile.github_url);
                "Opening GitHub...".to_string()
            }
            StaticCommand::Linkedin => {
                self.open_link(&self.profile.linkedin_url);
                "Opening LinkedIn...".to_string()
            }
            StaticCommand::DownloadCv => {
                if let Err(e) = self
                    .downloads
                    .download(&self.profile.cv_resource, &self.profile.cv_file_name)
                {
                    warn!(error = %e, "download failed");
                }
                "Downloading CV...".to_string()
            }
        }
    }

    fn open_link(&self, url: &str) {
        if let Err(e) = self.links.open_link(url) {
            warn!(url, error = %e, "could not open link");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, TerminalError};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Effect {
        Open(String),
        Download(String, String),
    }

    #[derive(Clone, Default)]
    struct Recorder {
        effects: Rc<RefCell<Vec<Effect>>>,
        fail: bool,
    }

    impl Recorder {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn taken(&self) -> Vec<Effect> {
            self.effects.borrow_mut().drain(..).collect()
        }

        fn outcome(&self) -> Result<()> {
            if self.fail {
                Err(TerminalError::effect("test", "blocked"))
            } else {
                Ok(())
            }
        }
    }

    impl LinkOpener for Recorder {
        fn open_link(&self, url: &str) -> Result<()> {
            self.effects.borrow_mut().push(Effect::Open(url.to_string()));
            self.outcome()
        }
    }

    impl FileDownloader for Recorder {
        fn download(&self, resource: &str, file_name: &str) -> Result<()> {
            self.effects
                .borrow_mut()
                .push(Effect::Download(resource.to_string(), file_name.to_string()));
            self.outcome()
        }
    }

    fn interpreter(recorder: &Recorder) -> Interpreter {
        Interpreter::with_defaults(Box::new(recorder.clone()), Box::new(recorder.clone()))
    }

    #[test]
    fn test_static_commands_ignore_case() {
        let recorder = Recorder::default();
        let term = interpreter(&recorder);
        for cmd in StaticCommand::ALL {
            let lower = term.process(cmd.name());
            let upper = term.process(&cmd.name().to_uppercase());
            assert_eq!(lower, upper);
            assert_eq!(lower.kind, ResponseKind::Response);
        }
    }

    #[test]
    fn test_help_aliases() {
        let term = interpreter(&Recorder::default());
        let help = term.process("help");
        assert_eq!(help.text(), Some(HELP_TEXT));
        assert_eq!(term.process("--help"), help);
        assert_eq!(term.process("-h"), help);
    }

    #[test]
    fn test_clear_has_no_text() {
        let term = interpreter(&Recorder::default());
        let response = term.process("CLEAR");
        assert!(response.is_clear());
        assert_eq!(response.text(), None);
        assert_eq!(response.kind, ResponseKind::Response);
    }

    #[test]
    fn test_projects_listing() {
        let term = interpreter(&Recorder::default());
        let response = term.process("projects");
        assert_eq!(
            response.text(),
            Some("Projects:\n\n  [1] PyAPI\n  [2] Simple Webhooks\n  [3] Coding Challenges\n\nUse \"open project [id]\" to view a project.")
        );
    }

    #[test]
    fn test_open_project_hit() {
        let recorder = Recorder::default();
        let term = interpreter(&recorder);
        let response = term.process("open project 1");
        assert_eq!(response, Response::success("Opening PyAPI..."));
        assert_eq!(
            recorder.taken(),
            vec![Effect::Open("https://github.com/levkany/PyAPI".to_string())]
        );
    }

    #[test]
    fn test_open_project_miss() {
        let recorder = Recorder::default();
        let term = interpreter(&recorder);
        let response = term.process("open project 99");
        assert_eq!(response.kind, ResponseKind::Error);
        assert_eq!(
            response.text(),
            Some("Project not found. Use \"projects\" to see available projects.")
        );
        assert!(recorder.taken().is_empty());
    }

    #[test]
    fn test_open_post_miss_on_padded_id() {
        let term = interpreter(&Recorder::default());
        let response = term.process("open post 01");
        assert_eq!(
            response,
            Response::error("Post not found. Use \"posts\" to see available posts.")
        );
    }

    #[test]
    fn test_unknown_command_echoes_original_case() {
        let term = interpreter(&Recorder::default());
        let response = term.process("FooBar");
        assert_eq!(
            response,
            Response::error("Command not found: FooBar\nType \"help\" for available commands.")
        );
    }

    #[test]
    fn test_side_effects_repeat() {
        let recorder = Recorder::default();
        let term = interpreter(&recorder);
        let first = term.process("github");
        let second = term.process("github");
        assert_eq!(first, second);
        assert_eq!(first.text(), Some("Opening GitHub..."));
        assert_eq!(recorder.taken().len(), 2);
    }

    #[test]
    fn test_download_cv() {
        let recorder = Recorder::default();
        let term = interpreter(&recorder);
        let response = term.process("download cv");
        assert_eq!(response, Response::response("Downloading CV..."));
        assert_eq!(
            recorder.taken(),
            vec![Effect::Download(
                "resume.pdf".to_string(),
                "Lev_Kany_CV.pdf".to_string()
            )]
        );
    }

    #[test]
    fn test_failed_effects_are_invisible() {
        let recorder = Recorder::failing();
        let term = interpreter(&recorder);
        assert_eq!(term.process("linkedin").text(), Some("Opening LinkedIn..."));
        assert_eq!(term.process("download cv").text(), Some("Downloading CV..."));
        assert_eq!(
            term.process("open post 2"),
            Response::success("Opening Clean Architecture in Python...")
        );
        assert_eq!(recorder.taken().len(), 3);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&Response::clear_screen()).unwrap();
        assert_eq!(json, r#"{"kind":"response","text":null}"#);

        let json = serde_json::to_string(&Response::success("Opening PyAPI...")).unwrap();
        assert_eq!(json, r#"{"kind":"success","text":"Opening PyAPI..."}"#);
    }
}
