use std::fmt;
use std::str::FromStr;

use course_core::model::StudentId;

/// Top-level screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Dashboard,
    Analytics,
    Content,
    SpeedGrader,
    Gradebook,
    Students,
    Groups,
    Gallery,
    Forum,
    Announcements,
    Calendar,
    Inbox,
    QuestionBank,
    RecycleBin,
    Settings,
}

impl View {
    /// Sidebar order.
    pub const SIDEBAR: [View; 15] = [
        View::Dashboard,
        View::Analytics,
        View::Announcements,
        View::Content,
        View::Students,
        View::Groups,
        View::Gradebook,
        View::SpeedGrader,
        View::Forum,
        View::Inbox,
        View::Gallery,
        View::Calendar,
        View::QuestionBank,
        View::RecycleBin,
        View::Settings,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Course Home",
            View::Analytics => "Course Analytics",
            View::Content => "Content Management",
            View::SpeedGrader => "Submissions",
            View::Gradebook => "Gradebook",
            View::Students => "Student List",
            View::Groups => "Group Management",
            View::Gallery => "Gallery Moderation",
            View::Forum => "Discussion Forum",
            View::Announcements => "Announcements",
            View::Calendar => "Calendar",
            View::Inbox => "Inbox",
            View::QuestionBank => "Question Bank",
            View::RecycleBin => "Recycle Bin",
            View::Settings => "Course Settings",
        }
    }

    /// Stable identifier used on the command line.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Analytics => "analytics",
            View::Content => "content",
            View::SpeedGrader => "speed-grader",
            View::Gradebook => "gradebook",
            View::Students => "students",
            View::Groups => "groups",
            View::Gallery => "gallery",
            View::Forum => "forum",
            View::Announcements => "announcements",
            View::Calendar => "calendar",
            View::Inbox => "inbox",
            View::QuestionBank => "question-bank",
            View::RecycleBin => "recycle-bin",
            View::Settings => "settings",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            View::Dashboard => "⌂",
            View::Analytics => "📈",
            View::Content => "📖",
            View::SpeedGrader => "✎",
            View::Gradebook => "▦",
            View::Students => "👥",
            View::Groups => "◎",
            View::Gallery => "🖼",
            View::Forum => "💬",
            View::Announcements => "📣",
            View::Calendar => "📅",
            View::Inbox => "✉",
            View::QuestionBank => "?",
            View::RecycleBin => "♻",
            View::Settings => "⚙",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownView(pub String);

impl fmt::Display for UnknownView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view: {}", self.0)
    }
}

impl std::error::Error for UnknownView {}

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        View::SIDEBAR
            .into_iter()
            .find(|view| view.slug() == wanted)
            .ok_or_else(|| UnknownView(s.to_owned()))
    }
}

/// Forms opened on top of a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubForm {
    ContentForm,
}

/// Single-level detail state beneath a top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrillDown {
    #[default]
    None,
    Student(StudentId),
    SubForm(SubForm),
}

/// What the content pane renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    View(View),
    StudentDetail(StudentId),
    ContentForm,
}

impl Screen {
    /// Header title for the screen.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Screen::View(view) => view.title(),
            Screen::StudentDetail(_) => "Student Detail",
            Screen::ContentForm => "Content Form",
        }
    }

    #[must_use]
    pub fn is_drill_down(self) -> bool {
        !matches!(self, Screen::View(_))
    }
}

#[must_use]
pub fn resolve(view: View, drill_down: DrillDown) -> Screen {
    match drill_down {
        DrillDown::Student(id) => Screen::StudentDetail(id),
        DrillDown::SubForm(SubForm::ContentForm) => Screen::ContentForm,
        DrillDown::None => Screen::View(view),
    }
}

/// Active view plus at most one drill-down.
///
/// A selected student wins over an open sub-form, which wins over the plain
/// view. Selecting one drill-down clears the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    view: View,
    student: Option<StudentId>,
    sub_form: Option<SubForm>,
}

impl Navigator {
    #[must_use]
    pub fn new(view: View) -> Self {
        Self {
            view,
            student: None,
            sub_form: None,
        }
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn drill_down(&self) -> DrillDown {
        match (self.student, self.sub_form) {
            (Some(id), _) => DrillDown::Student(id),
            (None, Some(form)) => DrillDown::SubForm(form),
            (None, None) => DrillDown::None,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        resolve(self.view, self.drill_down())
    }

    pub fn navigate(&mut self, view: View) {
        self.view = view;
        self.back();
    }

    pub fn select_student(&mut self, id: StudentId) {
        self.student = Some(id);
        self.sub_form = None;
    }

    pub fn open_sub_form(&mut self, form: SubForm) {
        self.sub_form = Some(form);
        self.student = None;
    }

    /// Leave the drill-down; the top-level view stays.
    pub fn back(&mut self) {
        self.student = None;
        self.sub_form = None;
    }
}
