//! Page layout: renders the portfolio into one tall column of lines and
//! records where each section landed.
//!
//! The layout is the "document" the scroll-spy and the navigator query. It
//! is rebuilt whenever the terminal size changes.

use chrono::Datelike;
use folio_core::content::{LinkKind, Portfolio};
use folio_core::page::{SectionBounds, SectionId, SectionLayout};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

/// Widest column the content uses; wider terminals get side margins
const MAX_CONTENT_WIDTH: usize = 96;

/// Row of a contact link inside the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkAnchor {
    pub row: u32,
    /// Index into `portfolio.contact.links`
    pub index: usize,
}

/// Rendered page plus section geometry
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    width: u16,
    viewport_height: u16,
    lines: Vec<Line<'static>>,
    sections: Vec<SectionBounds>,
    typing_row: Option<u32>,
    links: Vec<LinkAnchor>,
}

impl SectionLayout for PageLayout {
    fn bounds(&self, id: &SectionId) -> Option<SectionBounds> {
        self.sections.bounds(id)
    }
}

impl PageLayout {
    /// Lay out `order` for a body of `width` x `viewport_height` cells.
    /// Sections without content are left out of the page.
    pub fn build(
        portfolio: &Portfolio,
        order: &[SectionId],
        theme: &Theme,
        width: u16,
        viewport_height: u16,
    ) -> Self {
        let mut writer = PageWriter::new(theme, width);
        let mut sections = Vec::new();
        let mut typing_row = None;
        let mut links = Vec::new();

        for id in order {
            let top = writer.row();
            match id.as_str() {
                "hero" => {
                    typing_row = writer.hero(portfolio, viewport_height);
                }
                "about" => writer.about(portfolio),
                "skills" => writer.skills(portfolio),
                "experience" => writer.experience(portfolio),
                "projects" => writer.projects(portfolio),
                "achievements" => writer.achievements(portfolio),
                "education" => writer.education(portfolio),
                "contact" => links = writer.contact(portfolio),
                other => {
                    tracing::debug!("No renderer for section '{}', skipping", other);
                }
            }
            let height = writer.row() - top;
            if height > 0 {
                sections.push(SectionBounds::new(id.clone(), top, height));
            }
        }

        Self {
            width,
            viewport_height,
            lines: writer.lines,
            sections,
            typing_row,
            links,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Whether a rebuild is needed for this body size
    pub fn is_stale(&self, width: u16, viewport_height: u16) -> bool {
        self.width != width || self.viewport_height != viewport_height
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn total_height(&self) -> u32 {
        self.lines.len() as u32
    }

    /// Largest offset that still fills the viewport
    pub fn max_scroll(&self) -> u32 {
        self.total_height()
            .saturating_sub(self.viewport_height as u32)
    }

    /// Sections present in the page, in page order
    pub fn sections(&self) -> &[SectionBounds] {
        &self.sections
    }

    pub fn contains(&self, id: &SectionId) -> bool {
        self.sections.iter().any(|b| &b.id == id)
    }

    /// Row where the typed headline is drawn; None when the static headline is used
    pub fn typing_row(&self) -> Option<u32> {
        self.typing_row
    }

    pub fn links(&self) -> &[LinkAnchor] {
        &self.links
    }

    /// Lines visible from `offset` in a view of `height` rows
    pub fn visible(&self, offset: u32, height: u16) -> &[Line<'static>] {
        let start = (offset as usize).min(self.lines.len());
        let end = (start + height as usize).min(self.lines.len());
        &self.lines[start..end]
    }
}

/// Accumulates styled lines with a centered content column
struct PageWriter<'t> {
    theme: &'t Theme,
    lines: Vec<Line<'static>>,
    /// Left margin that centers the content column
    margin: usize,
    content_width: usize,
}

impl<'t> PageWriter<'t> {
    fn new(theme: &'t Theme, width: u16) -> Self {
        let width = width as usize;
        let content_width = width.saturating_sub(4).clamp(10, MAX_CONTENT_WIDTH);
        Self {
            theme,
            lines: Vec::new(),
            margin: width.saturating_sub(content_width) / 2,
            content_width,
        }
    }

    fn row(&self) -> u32 {
        self.lines.len() as u32
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn push(&mut self, spans: Vec<Span<'static>>) {
        let mut all = Vec::with_capacity(spans.len() + 1);
        all.push(Span::raw(" ".repeat(self.margin)));
        all.extend(spans);
        self.lines.push(Line::from(all));
    }

    fn centered(&mut self, text: &str, style: Style) {
        for line in wrap_words(text, self.content_width) {
            self.lines
                .push(Line::from(Span::styled(line, style)).alignment(Alignment::Center));
        }
    }

    fn paragraph(&mut self, text: &str, style: Style) {
        self.indented(text, "", style);
    }

    /// Wrapped text with a hanging prefix ("• ", "  ")
    fn indented(&mut self, text: &str, prefix: &str, style: Style) {
        let prefix_width = prefix.width();
        let avail = self.content_width.saturating_sub(prefix_width).max(1);
        for (i, line) in wrap_words(text, avail).into_iter().enumerate() {
            let lead = if i == 0 {
                prefix.to_string()
            } else {
                " ".repeat(prefix_width)
            };
            self.push(vec![
                Span::styled(lead, Style::default().fg(self.theme.primary)),
                Span::styled(line, style),
            ]);
        }
    }

    fn bullet(&mut self, text: &str) {
        self.indented(text, "  • ", Style::default().fg(self.theme.fg1));
    }

    /// Inline tags: [Python] [NLP] ... wrapped to the column
    fn tags(&mut self, items: &[String], color: ratatui::style::Color) {
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut used = 0;
        for item in items {
            let tag = format!("[{}]", item);
            let w = tag.width() + 1;
            if used > 0 && used + w > self.content_width {
                self.push(std::mem::take(&mut spans));
                used = 0;
            }
            spans.push(Span::styled(tag, Style::default().fg(color)));
            spans.push(Span::raw(" "));
            used += w;
        }
        if !spans.is_empty() {
            self.push(spans);
        }
    }

    fn title(&mut self, title: &str, subtitle: Option<&str>) {
        self.blank();
        self.centered(
            title,
            Style::default()
                .fg(self.theme.primary)
                .add_modifier(Modifier::BOLD),
        );
        let rule = "─".repeat(title.width().min(self.content_width).max(6));
        self.lines.push(
            Line::from(Span::styled(rule, Style::default().fg(self.theme.secondary)))
                .alignment(Alignment::Center),
        );
        if let Some(subtitle) = subtitle.filter(|s| !s.is_empty()) {
            self.centered(subtitle, Style::default().fg(self.theme.grey0));
        }
        self.blank();
    }

    /// ╭─ heading ─╮ top border of a card
    fn card_top(&mut self, heading: &str, color: ratatui::style::Color) {
        let heading = format!(" {} ", heading);
        let remaining = self
            .content_width
            .saturating_sub(heading.width() + 3);
        let border = Style::default().fg(self.theme.grey0);
        self.push(vec![
            Span::styled("╭─", border),
            Span::styled(heading, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled("─".repeat(remaining), border),
            Span::styled("╮", border),
        ]);
    }

    fn card_bottom(&mut self) {
        let border = Style::default().fg(self.theme.grey0);
        self.push(vec![
            Span::styled("╰", border),
            Span::styled("─".repeat(self.content_width.saturating_sub(2)), border),
            Span::styled("╯", border),
        ]);
    }

    fn meta(&mut self, text: &str) {
        self.paragraph(text, Style::default().fg(self.theme.grey0));
    }

    fn subheading(&mut self, text: &str, color: ratatui::style::Color) {
        self.paragraph(text, Style::default().fg(color).add_modifier(Modifier::BOLD));
    }

    // --- sections -------------------------------------------------------

    /// Returns the row reserved for the typed headline, if there are roles to type
    fn hero(&mut self, portfolio: &Portfolio, viewport_height: u16) -> Option<u32> {
        let profile = &portfolio.profile;
        let start = self.lines.len();

        self.centered(
            &profile.name,
            Style::default()
                .fg(self.theme.fg0)
                .add_modifier(Modifier::BOLD),
        );
        let typing_row = self.row();
        let typed = !profile.roles.is_empty();
        if !typed {
            self.centered(&profile.headline, Style::default().fg(self.theme.primary));
        } else {
            self.blank();
        }
        self.blank();
        self.centered(&profile.tagline, Style::default().fg(self.theme.fg1));
        if let Some(location) = &profile.location {
            self.centered(&format!("⌖ {}", location), Style::default().fg(self.theme.grey0));
        }
        self.blank();

        let mut cta = vec![Span::styled(
            " View My Work [w] ",
            Style::default().fg(self.theme.bg0).bg(self.theme.primary),
        )];
        if profile.cv.is_some() {
            cta.push(Span::raw("   "));
            cta.push(Span::styled(
                " Download CV [c] ",
                Style::default().fg(self.theme.primary),
            ));
        }
        self.lines.push(Line::from(cta).alignment(Alignment::Center));

        // Fill the first screen, content vertically centered
        let used = self.lines.len() - start;
        let target = viewport_height as usize;
        if used < target {
            let top_pad = (target - used) / 2;
            let hero = self.lines.split_off(start);
            self.lines.resize(start + top_pad, Line::default());
            self.lines.extend(hero);
            self.lines.resize(start + target, Line::default());
            return typed.then_some(typing_row + top_pad as u32);
        }
        typed.then_some(typing_row)
    }

    fn about(&mut self, portfolio: &Portfolio) {
        let about = &portfolio.about;
        if about.highlights.is_empty() && about.journey.is_empty() {
            return;
        }
        self.title("About Me", None);
        for (i, card) in about.highlights.iter().enumerate() {
            let color = if i % 2 == 0 { self.theme.primary } else { self.theme.secondary };
            let heading = match &card.icon {
                Some(icon) => format!("{} {}", icon, card.title),
                None => card.title.clone(),
            };
            self.card_top(&heading, color);
            for item in &card.items {
                self.bullet(item);
            }
            self.card_bottom();
        }
        if !about.journey.is_empty() {
            self.blank();
            self.subheading("My Journey", self.theme.secondary);
            for paragraph in &about.journey {
                self.blank();
                self.paragraph(paragraph, Style::default().fg(self.theme.fg1));
            }
        }
        self.blank();
    }

    fn skills(&mut self, portfolio: &Portfolio) {
        let skills = &portfolio.skills;
        if skills.groups.is_empty() {
            return;
        }
        self.title("Skills & Expertise", None);
        for (i, group) in skills.groups.iter().enumerate() {
            let color = if i % 2 == 0 { self.theme.primary } else { self.theme.secondary };
            self.subheading(&format!("● {}", group.name), color);
            if group.inline {
                self.tags(&group.items, color);
            } else {
                for item in &group.items {
                    self.bullet(item);
                }
            }
            self.blank();
        }
        if let Some(learning) = &skills.learning {
            self.centered(learning, Style::default().fg(self.theme.secondary));
            self.blank();
        }
    }

    fn experience(&mut self, portfolio: &Portfolio) {
        if portfolio.experience.is_empty() {
            return;
        }
        self.title("Work Experience", None);
        for job in &portfolio.experience {
            self.card_top(&job.role, self.theme.primary);
            self.subheading(&job.organization, self.theme.fg0);
            let mut meta = job.period.clone();
            if let Some(location) = &job.location {
                meta.push_str(" · ");
                meta.push_str(location);
            }
            self.meta(&meta);
            if !job.summary.is_empty() {
                self.blank();
                self.paragraph(&job.summary, Style::default().fg(self.theme.fg1));
            }
            if !job.responsibilities.is_empty() {
                self.blank();
                self.subheading("Key Responsibilities", self.theme.primary);
                for item in &job.responsibilities {
                    self.bullet(item);
                }
            }
            if !job.impact.is_empty() {
                self.blank();
                self.subheading("Impact", self.theme.secondary);
                for item in &job.impact {
                    self.bullet(item);
                }
            }
            if !job.stack.is_empty() {
                self.blank();
                self.tags(&job.stack, self.theme.primary_dark);
            }
            self.card_bottom();
            self.blank();
        }
    }

    fn projects(&mut self, portfolio: &Portfolio) {
        if portfolio.projects.is_empty() {
            return;
        }
        self.title("Projects", None);
        for project in &portfolio.projects {
            self.card_top(&project.title, self.theme.primary);
            self.meta(&project.context);
            if !project.description.is_empty() {
                self.paragraph(&project.description, Style::default().fg(self.theme.fg1));
            }
            self.tags(&project.tags, self.theme.secondary);
            self.card_bottom();
            self.blank();
        }
    }

    fn achievements(&mut self, portfolio: &Portfolio) {
        if portfolio.achievements.is_empty() {
            return;
        }
        self.title(
            "Achievements & Certifications",
            Some("Academic recognition, workshops, and professional certifications"),
        );
        for item in &portfolio.achievements {
            self.card_top(&item.title, self.theme.secondary);
            if let Some(badge) = &item.badge {
                self.push(vec![Span::styled(
                    format!(" {} ", badge),
                    Style::default().fg(self.theme.bg0).bg(self.theme.secondary),
                )]);
            }
            self.meta(&item.issuer);
            if !item.description.is_empty() {
                self.paragraph(&item.description, Style::default().fg(self.theme.fg1));
            }
            for highlight in &item.highlights {
                self.bullet(highlight);
            }
            if let Some(takeaway) = &item.takeaway {
                self.paragraph(
                    takeaway,
                    Style::default()
                        .fg(self.theme.grey0)
                        .add_modifier(Modifier::ITALIC),
                );
            }
            self.card_bottom();
            self.blank();
        }
    }

    fn education(&mut self, portfolio: &Portfolio) {
        if portfolio.education.is_empty() {
            return;
        }
        self.title("Education", None);
        for entry in &portfolio.education {
            self.card_top(&format!("🎓 {}", entry.degree), self.theme.primary);
            self.subheading(&entry.institution, self.theme.fg0);
            let mut meta = entry.period.clone();
            if let Some(location) = &entry.location {
                meta = format!("{} · {}", location, meta);
            }
            self.meta(&meta);
            if let Some(grade) = &entry.grade {
                self.paragraph(grade, Style::default().fg(self.theme.secondary));
            }
            if !entry.coursework.is_empty() {
                self.blank();
                self.subheading("Relevant Coursework", self.theme.primary);
                self.tags(&entry.coursework, self.theme.fg1);
            }
            if let Some(project) = &entry.final_project {
                self.blank();
                self.subheading("Final Project", self.theme.primary);
                self.paragraph(project, Style::default().fg(self.theme.fg1));
            }
            self.card_bottom();
            self.blank();
        }
    }

    fn contact(&mut self, portfolio: &Portfolio) -> Vec<LinkAnchor> {
        let contact = &portfolio.contact;
        let mut anchors = Vec::new();
        if contact.intro.is_empty() && contact.links.is_empty() {
            return anchors;
        }
        self.title("Get In Touch", None);
        if !contact.intro.is_empty() {
            self.centered(&contact.intro, Style::default().fg(self.theme.fg1));
            self.blank();
        }
        for (index, link) in contact.links.iter().enumerate() {
            let icon = match link.kind() {
                LinkKind::Email => "✉",
                LinkKind::Web => "↗",
                LinkKind::Other => "•",
            };
            anchors.push(LinkAnchor {
                row: self.row(),
                index,
            });
            self.push(vec![
                Span::styled(format!("{} ", icon), Style::default().fg(self.theme.primary)),
                Span::styled(
                    format!("{:<10}", link.label),
                    Style::default().fg(self.theme.fg0).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    link.value.clone(),
                    Style::default()
                        .fg(self.theme.link)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]);
        }
        self.blank();
        let year = chrono::Local::now().year();
        self.centered(
            &format!("© {} {}", year, portfolio.profile.name),
            Style::default().fg(self.theme.grey0),
        );
        self.blank();
        anchors
    }
}

/// Word-wrap respecting unicode widths; words wider than the line are split
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut result = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= max_width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                result.push(std::mem::take(&mut current));
                current_width = 0;
            }

            // Hard-split words that cannot fit on a line of their own
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(1);
                if current_width + ch_width > max_width && !current.is_empty() {
                    result.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        result.push(current);
    }

    if result.is_empty() {
        result.push(String::new());
    }

    result
}
