//! Static lesson content: panels, their exercise blocks, and the quiz bank.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::exercises::OptionResult;
use crate::model::{PageId, Question, QuestionBank, QuestionError};
use crate::progress::TOTAL_PAGES;

pub const HOME_PAGE: &str = "page-home";
pub const PRACTICE_PAGE: &str = "page-brain";
pub const QUIZ_PAGE: &str = "page-quiz";
pub const REPORT_PAGE: &str = "page-report";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error("duplicate page id: {0}")]
    DuplicatePage(PageId),

    #[error("page {page} links to unknown page {next}")]
    UnknownNext { page: PageId, next: PageId },

    #[error("expected {expected} concept pages, found {found}")]
    ConceptCount { expected: usize, found: usize },

    #[error("missing home page {0}")]
    MissingHome(&'static str),

    #[error(transparent)]
    Question(#[from] QuestionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Concept,
    Practice,
    Quiz,
    Report,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardSpec {
    pub front: &'static str,
    pub back: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(&'static str),
    Code(&'static str),
    KeyPoints(Vec<&'static str>),
    Flashcards(Vec<FlashcardSpec>),
    OptionSelect {
        prompt: &'static str,
        options: Vec<(&'static str, OptionResult)>,
    },
    Reveal {
        prompt: &'static str,
        explanation: &'static str,
    },
    FillBlank {
        before: &'static str,
        answer: &'static str,
        after: &'static str,
    },
    /// `reveal` must contain `TRUE` when the statement is true.
    TrueFalse {
        statement: &'static str,
        reveal: &'static str,
    },
    LongAnswer {
        question: &'static str,
        answer: &'static str,
    },
    AnchorDemo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: PageId,
    pub title: &'static str,
    pub icon: &'static str,
    pub kind: PageKind,
    pub blocks: Vec<Block>,
    /// Where "complete and continue" leads.
    pub next: Option<PageId>,
}

impl Page {
    fn new(id: &'static str, title: &'static str, icon: &'static str, kind: PageKind) -> Self {
        Self {
            id: PageId::from_static(id),
            title,
            icon,
            kind,
            blocks: Vec::new(),
            next: None,
        }
    }

    fn blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    fn next(mut self, next: &'static str) -> Self {
        self.next = Some(PageId::from_static(next));
        self
    }
}

/// A complete lesson: ordered panels plus the quiz question bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonContent {
    title: &'static str,
    pages: Vec<Page>,
    questions: QuestionBank,
}

impl LessonContent {
    /// # Errors
    ///
    /// Returns `ContentError` for duplicate ids, dangling `next` links, a
    /// missing home page, or a concept page count other than `TOTAL_PAGES`.
    pub fn new(
        title: &'static str,
        pages: Vec<Page>,
        questions: QuestionBank,
    ) -> Result<Self, ContentError> {
        let mut seen = BTreeSet::new();
        for page in &pages {
            if !seen.insert(page.id.clone()) {
                return Err(ContentError::DuplicatePage(page.id.clone()));
            }
        }
        for page in &pages {
            if let Some(next) = &page.next
                && !seen.contains(next)
            {
                return Err(ContentError::UnknownNext {
                    page: page.id.clone(),
                    next: next.clone(),
                });
            }
        }
        if !seen.iter().any(|id| id == HOME_PAGE) {
            return Err(ContentError::MissingHome(HOME_PAGE));
        }
        let concepts = pages
            .iter()
            .filter(|page| page.kind == PageKind::Concept)
            .count();
        if concepts != TOTAL_PAGES {
            return Err(ContentError::ConceptCount {
                expected: TOTAL_PAGES,
                found: concepts,
            });
        }

        Ok(Self {
            title,
            pages,
            questions,
        })
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    #[must_use]
    pub fn page(&self, id: &PageId) -> Option<&Page> {
        self.pages.iter().find(|page| &page.id == id)
    }

    #[must_use]
    pub fn page_ids(&self) -> Vec<PageId> {
        self.pages.iter().map(|page| page.id.clone()).collect()
    }

    pub fn concept_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages
            .iter()
            .filter(|page| page.kind == PageKind::Concept)
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionBank {
        &self.questions
    }

    /// The built-in "Links & Frames in HTML" chapter.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` only if the built-in catalog is inconsistent.
    pub fn links_and_frames() -> Result<Self, ContentError> {
        LessonContent::new(
            "Chapter 6: Links & Frames in HTML",
            links_and_frames_pages(),
            links_and_frames_questions()?,
        )
    }
}

fn links_and_frames_pages() -> Vec<Page> {
    vec![
        Page::new(HOME_PAGE, "Links & Frames", "🏠", PageKind::Home).blocks(vec![
            Block::Paragraph(
                "Web pages become a web when they link to each other. In this chapter you will \
                 learn how to create hyperlinks, style them, link inside a page, and bring \
                 audio, video and other pages into your own page.",
            ),
            Block::Paragraph(
                "Work through the six concept cards, try the Brain Developer exercises, then \
                 take the quiz. Every finished concept earns you stars!",
            ),
        ]),
        Page::new("page-anchor", "The Anchor Tag", "🔗", PageKind::Concept)
            .blocks(vec![
                Block::Paragraph(
                    "A hyperlink is created with the anchor tag <A>. The text between the \
                     opening and closing tags is what the visitor clicks.",
                ),
                Block::Code("<A href=\"https://www.example.com\">Visit Example</A>"),
                Block::KeyPoints(vec![
                    "href (Hypertext Reference) holds the destination URL.",
                    "The link text should describe where the link goes.",
                    "Links can point to web pages, files, email addresses or sections of a page.",
                ]),
                Block::AnchorDemo,
                Block::Flashcards(vec![
                    FlashcardSpec {
                        front: "<A>",
                        back: "The anchor tag, used to create hyperlinks.",
                    },
                    FlashcardSpec {
                        front: "href",
                        back: "Attribute that holds the address the link points to.",
                    },
                ]),
            ])
            .next("page-link-states"),
        Page::new("page-link-states", "Link States", "🎨", PageKind::Concept)
            .blocks(vec![
                Block::Paragraph(
                    "CSS lets you style a link differently depending on what the visitor is \
                     doing with it. These are called pseudo-classes.",
                ),
                Block::Code(
                    "A:link    { color: blue; }\nA:visited { color: purple; }\nA:hover   { color: red; }\nA:active  { color: orange; }",
                ),
                Block::Flashcards(vec![
                    FlashcardSpec {
                        front: "A:link",
                        back: "A link that has not been visited yet.",
                    },
                    FlashcardSpec {
                        front: "A:visited",
                        back: "A link the visitor has already clicked.",
                    },
                    FlashcardSpec {
                        front: "A:hover",
                        back: "A link while the mouse pointer is over it.",
                    },
                    FlashcardSpec {
                        front: "A:active",
                        back: "A link at the moment it is being clicked.",
                    },
                ]),
            ])
            .next("page-linking"),
        Page::new("page-linking", "Internal & External Links", "🧭", PageKind::Concept)
            .blocks(vec![
                Block::Paragraph(
                    "External linking connects your page to a different web page or website. \
                     Internal linking jumps to another section of the SAME page.",
                ),
                Block::Code(
                    "<A href=\"#contact\">Go to Contact</A>\n...\n<H2 id=\"contact\">Contact</H2>",
                ),
                Block::KeyPoints(vec![
                    "Give the target section an id.",
                    "Point href at that id with a leading #.",
                    "External links use a full URL such as https://www.example.com.",
                ]),
            ])
            .next("page-audio"),
        Page::new("page-audio", "The AUDIO Tag", "🎵", PageKind::Concept)
            .blocks(vec![
                Block::Paragraph("The <AUDIO> tag plays sound files directly in the web page."),
                Block::Code("<AUDIO src=\"song.mp3\" controls autoplay loop></AUDIO>"),
                Block::KeyPoints(vec![
                    "Supported formats: .mp3, .ogg and .wav.",
                    "controls shows play, pause and volume buttons.",
                    "autoplay starts playing when the page loads.",
                    "loop plays the file again and again.",
                ]),
            ])
            .next("page-video"),
        Page::new("page-video", "The VIDEO Tag", "🎬", PageKind::Concept)
            .blocks(vec![
                Block::Paragraph("The <VIDEO> tag plays video files inside the web page."),
                Block::Code("<VIDEO src=\"movie.mp4\" width=\"320\" height=\"240\" controls></VIDEO>"),
                Block::KeyPoints(vec![
                    "Supported formats: .mp4, .webm and .ogg.",
                    "width and height set the size of the player.",
                    "controls, autoplay and loop work just like they do for audio.",
                ]),
            ])
            .next("page-iframe"),
        Page::new("page-iframe", "Inline Frames", "🖼️", PageKind::Concept)
            .blocks(vec![
                Block::Paragraph(
                    "An inline frame, <iFrame>, shows another HTML document inside the current \
                     page, like a window into a different page.",
                ),
                Block::Code("<iFrame src=\"news.html\" width=\"400\" height=\"300\"></iFrame>"),
                Block::KeyPoints(vec![
                    "src gives the path of the document to display.",
                    "width and height set the size of the frame.",
                ]),
            ])
            .next(PRACTICE_PAGE),
        Page::new(PRACTICE_PAGE, "Brain Developer", "🧠", PageKind::Practice).blocks(vec![
            Block::OptionSelect {
                prompt: "Which tag creates a hyperlink?",
                options: vec![
                    ("<LINK>", OptionResult::Wrong),
                    ("<A>", OptionResult::Correct),
                    ("<HREF>", OptionResult::Wrong),
                ],
            },
            Block::OptionSelect {
                prompt: "Which attribute shows play and pause buttons on an audio player?",
                options: vec![
                    ("autoplay", OptionResult::Wrong),
                    ("loop", OptionResult::Wrong),
                    ("controls", OptionResult::Correct),
                ],
            },
            Block::Reveal {
                prompt: "Why should link text describe its destination?",
                explanation: "Visitors scan for links. Text like \"Read the school rules\" tells \
                              them where they will go; \"click here\" does not.",
            },
            Block::FillBlank {
                before: "The attribute that holds a link's destination is",
                answer: "href",
                after: ".",
            },
            Block::FillBlank {
                before: "An inline frame shows its document using the",
                answer: "src",
                after: "attribute.",
            },
            Block::FillBlank {
                before: "Linking to a section of the same page is called",
                answer: "internal",
                after: "linking.",
            },
            Block::FillBlank {
                before: "The pseudo-class for a link under the mouse pointer is A:",
                answer: "hover",
                after: "",
            },
            Block::TrueFalse {
                statement: "The <AUDIO> tag can play .mp3 files.",
                reveal: "✅ TRUE: .mp3, .ogg and .wav are supported.",
            },
            Block::TrueFalse {
                statement: "A:visited styles links that have never been clicked.",
                reveal: "❌ FALSE: that is A:link. A:visited is for links already clicked.",
            },
            Block::TrueFalse {
                statement: "An <iFrame> can display another HTML page inside the current page.",
                reveal: "✅ TRUE: that is exactly what an inline frame does.",
            },
            Block::TrueFalse {
                statement: "The loop attribute makes a video start automatically.",
                reveal: "❌ FALSE: that is autoplay. loop repeats the file.",
            },
            Block::LongAnswer {
                question: "Explain the difference between internal and external linking.",
                answer: "Internal linking jumps to a section of the same page using an id and a \
                         # in href. External linking opens a different page or website using \
                         its URL.",
            },
            Block::LongAnswer {
                question: "List three attributes of the <VIDEO> tag and what they do.",
                answer: "controls shows the player buttons, autoplay starts the video when the \
                         page loads, and loop replays it when it ends. width and height set \
                         its size.",
            },
        ]),
        Page::new(QUIZ_PAGE, "Quiz Time", "📝", PageKind::Quiz),
        Page::new(REPORT_PAGE, "Teacher Report", "📋", PageKind::Report),
    ]
}

fn links_and_frames_questions() -> Result<QuestionBank, QuestionError> {
    let questions = vec![
        Question::new(
            "What is the HTML tag used to create a hyperlink?",
            ["<LINK>", "<A>", "<HREF>", "<URL>"],
            1,
            "The anchor tag <A> creates hyperlinks: <A href='url'>Text</A>.",
        )?,
        Question::new(
            "Which CSS pseudo-class applies when a user moves the mouse over a link?",
            ["A:link", "A:visited", "A:hover", "A:active"],
            2,
            "A:hover applies while the mouse pointer is over the link.",
        )?,
        Question::new(
            "What attribute of the <A> tag defines the destination URL?",
            ["src", "link", "href", "url"],
            2,
            "href (Hypertext Reference) defines where the link goes.",
        )?,
        Question::new(
            "Which of the following is a correct audio file format for HTML?",
            [".mp4", ".avi", ".mp3", ".wmv"],
            2,
            "The <AUDIO> tag supports .mp3, .ogg and .wav.",
        )?,
        Question::new(
            "What tag is used to embed another HTML page inside a web page?",
            ["<FRAME>", "<EMBED>", "<iFrame>", "<INCLUDE>"],
            2,
            "<iFrame> (inline frame) embeds another HTML document in the current page.",
        )?,
        Question::new(
            "When a link connects to another section on THE SAME PAGE, it is called:",
            [
                "External linking",
                "Absolute linking",
                "Internal linking",
                "Anchor linking",
            ],
            2,
            "Internal linking connects to a different section of the same page.",
        )?,
        Question::new(
            "Which attribute of <iFrame> specifies the document to display?",
            ["href", "link", "url", "src"],
            3,
            "src gives the path of the document shown in the inline frame.",
        )?,
        Question::new(
            "Which CSS link state applies to a link the user has ALREADY VISITED?",
            ["A:link", "A:hover", "A:visited", "A:active"],
            2,
            "A:visited styles links the user has previously clicked.",
        )?,
        Question::new(
            "Which video format is supported by the HTML <VIDEO> tag?",
            [".avi", ".wmv", ".flv", ".mp4"],
            3,
            "The <VIDEO> tag supports .mp4, .webm and .ogg.",
        )?,
        Question::new(
            "What does the 'autoplay' attribute do in <AUDIO> and <VIDEO> tags?",
            [
                "Shows controls on screen",
                "Plays the file automatically when page loads",
                "Loops the file endlessly",
                "Pauses the file",
            ],
            1,
            "autoplay starts the audio or video as soon as the page loads.",
        )?,
    ];
    QuestionBank::new(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_lesson_is_consistent() {
        let lesson = LessonContent::links_and_frames().unwrap();
        assert_eq!(lesson.questions().len(), 10);
        assert_eq!(lesson.concept_pages().count(), TOTAL_PAGES);
        assert!(lesson.page(&PageId::from_static(QUIZ_PAGE)).is_some());
        assert!(lesson.page(&PageId::from_static(REPORT_PAGE)).is_some());
    }

    #[test]
    fn concept_pages_chain_to_practice() {
        let lesson = LessonContent::links_and_frames().unwrap();
        let last = lesson.concept_pages().last().unwrap();
        assert_eq!(last.next.as_ref().unwrap(), PRACTICE_PAGE);
        assert!(lesson.concept_pages().all(|page| page.next.is_some()));
    }

    #[test]
    fn true_false_reveals_encode_answers() {
        let lesson = LessonContent::links_and_frames().unwrap();
        let practice = lesson.page(&PageId::from_static(PRACTICE_PAGE)).unwrap();
        let reveals: Vec<_> = practice
            .blocks
            .iter()
            .filter_map(|block| match block {
                Block::TrueFalse { reveal, .. } => Some(*reveal),
                _ => None,
            })
            .collect();
        assert_eq!(reveals.len(), 4);
        assert_eq!(reveals.iter().filter(|r| r.contains("TRUE")).count(), 2);
    }

    #[test]
    fn rejects_duplicate_pages() {
        let mut pages = links_and_frames_pages();
        pages.push(Page::new(HOME_PAGE, "Again", "", PageKind::Home));
        let err = LessonContent::new("x", pages, links_and_frames_questions().unwrap()).unwrap_err();
        assert_eq!(err, ContentError::DuplicatePage(PageId::from_static(HOME_PAGE)));
    }

    #[test]
    fn rejects_dangling_next() {
        let mut pages = links_and_frames_pages();
        pages[1].next = Some(PageId::from_static("page-nowhere"));
        let err = LessonContent::new("x", pages, links_and_frames_questions().unwrap()).unwrap_err();
        assert!(matches!(err, ContentError::UnknownNext { .. }));
    }

    #[test]
    fn rejects_wrong_concept_count() {
        let mut pages = links_and_frames_pages();
        pages.retain(|page| page.id != "page-video");
        pages.iter_mut().for_each(|page| {
            if page.next.as_ref().is_some_and(|next| next == "page-video") {
                page.next = Some(PageId::from_static("page-iframe"));
            }
        });
        let err = LessonContent::new("x", pages, links_and_frames_questions().unwrap()).unwrap_err();
        assert_eq!(
            err,
            ContentError::ConceptCount {
                expected: TOTAL_PAGES,
                found: TOTAL_PAGES - 1
            }
        );
    }
}
