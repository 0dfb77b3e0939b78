use lesson_core::{PageId, PageKind};
use services::LessonSession;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderVm {
    pub title: &'static str,
    pub stars: u32,
    pub percent: u32,
    pub percent_label: String,
    pub bar_width: String,
}

#[must_use]
pub fn map_header(session: &LessonSession) -> HeaderVm {
    let progress = session.progress();
    HeaderVm {
        title: session.content().title(),
        stars: session.total_stars(),
        percent: progress.percent,
        percent_label: format!("{}% Complete", progress.percent),
        bar_width: format!("width: {}%;", progress.percent),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItemVm {
    pub id: PageId,
    pub title: &'static str,
    pub icon: &'static str,
    pub active: bool,
    pub complete: bool,
}

#[must_use]
pub fn map_nav_items(session: &LessonSession) -> Vec<NavItemVm> {
    session
        .content()
        .pages()
        .iter()
        .map(|page| NavItemVm {
            id: page.id.clone(),
            title: page.title,
            icon: page.icon,
            active: session.is_active(&page.id),
            complete: page.kind == PageKind::Concept && session.is_complete(&page.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lesson_core::LessonContent;
    use lesson_core::time::fixed_clock;
    use services::LessonSettings;

    use super::*;

    fn session() -> LessonSession {
        let content = Arc::new(LessonContent::links_and_frames().unwrap());
        LessonSession::with_seed(content, LessonSettings::default(), fixed_clock(), 3).unwrap()
    }

    #[test]
    fn header_reflects_progress() {
        let mut session = session();
        session.complete_and_navigate("page-anchor", "page-link-states");
        let header = map_header(&session);
        assert_eq!(header.stars, 2);
        assert_eq!(header.percent_label, "17% Complete");
        assert_eq!(header.bar_width, "width: 17%;");
    }

    #[test]
    fn exactly_one_nav_item_is_active() {
        let mut session = session();
        session.navigate_to("page-quiz").unwrap();
        let items = map_nav_items(&session);
        let active: Vec<_> = items.iter().filter(|item| item.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "page-quiz");
    }
}
