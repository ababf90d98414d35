//! Showcase section descriptors.

/// Static record describing one showcase topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub key: &'static str,
    /// Path of the demo this section was adapted from.
    pub source: &'static str,
    pub summary: &'static str,
}

impl SectionDescriptor {
    pub const fn new(key: &'static str, source: &'static str, summary: &'static str) -> Self {
        Self {
            key,
            source,
            summary,
        }
    }

    /// Overview bullet, e.g. `- Layouts: ... (src: showcase/layout_basic.py)`.
    pub fn overview_line(&self) -> String {
        format!("- {}: {} (src: {})", self.key, self.summary, self.source)
    }
}

/// The six showcase sections, in publication order.
pub const SHOWCASE_SECTIONS: [SectionDescriptor; 6] = [
    SectionDescriptor::new(
        "Layouts",
        "showcase/layout_basic.py",
        "Layout demos translated into chat-friendly descriptions.",
    ),
    SectionDescriptor::new(
        "Widgets",
        "showcase/formwidgets02.py",
        "Forms, lists, trees, tables, tabs, text editors.",
    ),
    SectionDescriptor::new(
        "Pickers",
        "showcase/filepicker.py",
        "File/Color/Text pickers explained and exemplified.",
    ),
    SectionDescriptor::new(
        "Graphs",
        "showcase/graph.py",
        "Graph drawing logic summarized with code snippets.",
    ),
    SectionDescriptor::new(
        "Windows",
        "showcase/windows.py",
        "Window/flags behaviors enumerated for reference.",
    ),
    SectionDescriptor::new(
        "Extra",
        "showcase/dragndrop.py",
        "Scroll areas, drag-n-drop, and signal mask notes.",
    ),
];
