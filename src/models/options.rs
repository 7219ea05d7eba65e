use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest page the repository listing endpoint will return.
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoSort {
    Created,
    #[default]
    Updated,
    Pushed,
    FullName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Value of the listing endpoint's `type` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnershipScope {
    All,
    #[default]
    Owner,
    Public,
    Private,
    Member,
}

impl RepoSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoSort::Created => "created",
            RepoSort::Updated => "updated",
            RepoSort::Pushed => "pushed",
            RepoSort::FullName => "full_name",
        }
    }
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl OwnershipScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnershipScope::All => "all",
            OwnershipScope::Owner => "owner",
            OwnershipScope::Public => "public",
            OwnershipScope::Private => "private",
            OwnershipScope::Member => "member",
        }
    }
}

impl FromStr for RepoSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "created" => Ok(RepoSort::Created),
            "updated" => Ok(RepoSort::Updated),
            "pushed" => Ok(RepoSort::Pushed),
            "full_name" | "name" => Ok(RepoSort::FullName),
            other => Err(format!(
                "unknown sort '{}', expected created, updated, pushed or full_name",
                other
            )),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown direction '{}', expected asc or desc", other)),
        }
    }
}

impl FromStr for OwnershipScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(OwnershipScope::All),
            "owner" => Ok(OwnershipScope::Owner),
            "public" => Ok(OwnershipScope::Public),
            "private" => Ok(OwnershipScope::Private),
            "member" => Ok(OwnershipScope::Member),
            other => Err(format!(
                "unknown scope '{}', expected all, owner, public, private or member",
                other
            )),
        }
    }
}

impl fmt::Display for RepoSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OwnershipScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query options for a single page of `/users/{login}/repos`.
///
/// Only one page is ever requested, so accounts with more repositories than
/// `per_page` (at most [`MAX_PER_PAGE`]) get a truncated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoListOptions {
    pub sort: RepoSort,
    pub direction: SortDirection,
    pub per_page: u32,
    pub scope: OwnershipScope,
}

impl Default for RepoListOptions {
    fn default() -> Self {
        Self {
            sort: RepoSort::default(),
            direction: SortDirection::default(),
            per_page: MAX_PER_PAGE,
            scope: OwnershipScope::default(),
        }
    }
}

impl RepoListOptions {
    pub fn sorted(sort: RepoSort, direction: SortDirection) -> Self {
        Self {
            sort,
            direction,
            ..Self::default()
        }
    }

    pub fn effective_per_page(&self) -> u32 {
        self.per_page.clamp(1, MAX_PER_PAGE)
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("sort", self.sort.as_str().to_string()),
            ("direction", self.direction.as_str().to_string()),
            ("per_page", self.effective_per_page().to_string()),
            ("type", self.scope.as_str().to_string()),
        ]
    }
}
