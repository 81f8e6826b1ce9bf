use std::fmt;

/// The three independent resources, one store file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Categories,
    CalendarEvents,
    RpmBlocks,
}

impl Resource {
    pub const ALL: [Resource; 3] = [
        Resource::Categories,
        Resource::CalendarEvents,
        Resource::RpmBlocks,
    ];

    /// Path segment under `/api/`, also used as the CLI name
    pub fn slug(&self) -> &'static str {
        match self {
            Resource::Categories => "categories",
            Resource::CalendarEvents => "calendar-events",
            Resource::RpmBlocks => "rpmblocks",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Resource::Categories => "categories.json",
            Resource::CalendarEvents => "calendar-events.json",
            Resource::RpmBlocks => "rpm-blocks.json",
        }
    }

    /// Singular label used in response messages ("Category not found")
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Categories => "Category",
            Resource::CalendarEvents => "Calendar event",
            Resource::RpmBlocks => "RPM block",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.slug() == slug)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}
