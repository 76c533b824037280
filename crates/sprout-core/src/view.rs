//! View deriver: the filtered, sorted projection of the collection.

use std::{cmp::Ordering, ops::Index};

use crate::{
    collate,
    collection::Collection,
    models::{Project, ProjectId, SortKey, ViewParams},
};

/// Filtered and sorted projects, ready for display. Never the source of
/// truth: rebuilt from the [`Collection`] whenever it or the parameters change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectView(pub Vec<Project>);

impl ProjectView {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Project at a zero-based view position.
    pub fn get(&self, position: usize) -> Option<&Project> {
        self.0.get(position)
    }

    /// Zero-based position of the project with `id`, if visible.
    pub fn position_of(&self, id: &ProjectId) -> Option<usize> {
        self.0.iter().position(|project| &project.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.0.iter()
    }
}

impl Index<usize> for ProjectView {
    type Output = Project;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ProjectView {
    type Item = Project;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProjectView {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Derive the view for `params` from `collection`.
///
/// Filtering keeps a project when its name or description contains the
/// search term (case-insensitive) and, if a plant type is set, when the tags
/// match exactly. Sorting is ascending and stable: projects with equal keys
/// keep their collection order. Projects missing the sort field go last.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use sprout_core::{
///     derive_view,
///     models::{PlantType, Project, ProjectFields, ProjectId, ViewParams},
///     Collection,
/// };
///
/// let mut collection = Collection::new();
/// for (id, name) in [("1", "Tomate-school"), ("2", "Alface-school")] {
///     let fields = ProjectFields {
///         name: name.to_string(),
///         description: String::new(),
///         plant_type: PlantType::Tomate,
///         start_date: date(2024, 1, 1),
///     };
///     collection.append(Project::new(ProjectId::from(id), fields))?;
/// }
///
/// let view = derive_view(&collection, &ViewParams::default());
/// let names: Vec<_> = view.iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["Alface-school", "Tomate-school"]);
/// # Ok::<(), sprout_core::SproutError>(())
/// ```
pub fn derive_view(collection: &Collection, params: &ViewParams) -> ProjectView {
    let term = params.search_term.to_lowercase();

    let mut projects: Vec<Project> = collection
        .iter()
        .filter(|project| matches_search(project, &term))
        .filter(|project| {
            params
                .plant_type
                .map_or(true, |wanted| project.plant_type == Some(wanted))
        })
        .cloned()
        .collect();

    // `sort_by` is a stable merge sort, which the tie rule relies on.
    projects.sort_by(|a, b| compare_by(a, b, params.sort_key));
    ProjectView(projects)
}

fn matches_search(project: &Project, lowercase_term: &str) -> bool {
    lowercase_term.is_empty()
        || project.name.to_lowercase().contains(lowercase_term)
        || project.description.to_lowercase().contains(lowercase_term)
}

fn compare_by(a: &Project, b: &Project, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => collate::compare(&a.name, &b.name),
        SortKey::Date => present_first(a.start_date, b.start_date, |x, y| x.cmp(&y)),
        SortKey::PlantType => present_first(a.plant_type, b.plant_type, |x, y| {
            collate::compare(x.as_str(), y.as_str())
        }),
    }
}

fn present_first<T>(a: Option<T>, b: Option<T>, cmp: impl FnOnce(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
