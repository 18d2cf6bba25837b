//! Page selection matrix used to compose a custom PDF.
//!
//! The state is an ordered list of `(material_id, page_num)` pairs. Insertion
//! order is the assembly order of the generated document, so there is no sort
//! step anywhere: toggling appends or removes, nothing else reorders.

use serde::{Deserialize, Serialize};

use crate::{
    custom_pdf::{GenerateCustomRequest, PageSelection, SourceDocument},
    validation::ValidationError,
};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Ordered pages with no duplicate `(material_id, page_num)` pairs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionList {
    items: Vec<PageSelection>,
}

impl SelectionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the pair if present, otherwise appends it at the end.
    pub fn toggle(&mut self, material_id: &str, page_num: u32, student_name: &str) -> ToggleOutcome {
        if let Some(idx) = self.position(material_id, page_num) {
            self.items.remove(idx);
            ToggleOutcome::Removed
        } else {
            self.items.push(PageSelection {
                material_id: material_id.to_string(),
                page_num,
                student_name: student_name.to_string(),
            });
            ToggleOutcome::Added
        }
    }

    pub fn is_selected(&self, material_id: &str, page_num: u32) -> bool {
        self.position(material_id, page_num).is_some()
    }

    /// 1-based position in the assembly order, for the page badges.
    pub fn order_of(&self, material_id: &str, page_num: u32) -> Option<usize> {
        self.position(material_id, page_num).map(|idx| idx + 1)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[PageSelection] {
        &self.items
    }

    fn position(&self, material_id: &str, page_num: u32) -> Option<usize> {
        self.items.iter().position(|p| p.matches(material_id, page_num))
    }
}

/// Source documents of one course week plus the pages chosen from them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionMatrix {
    documents: Vec<SourceDocument>,
    selection: SelectionList,
}

impl SelectionMatrix {
    pub fn new(documents: Vec<SourceDocument>) -> Self {
        Self { documents, selection: SelectionList::new() }
    }

    pub fn documents(&self) -> &[SourceDocument] {
        &self.documents
    }

    pub fn document(&self, index: usize) -> Option<&SourceDocument> {
        self.documents.get(index)
    }

    pub fn selection(&self) -> &SelectionList {
        &self.selection
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Selected pages in assembly order.
    pub fn ordered_selection(&self) -> &[PageSelection] {
        self.selection.as_slice()
    }

    /// Number of page columns: the largest page count of any document.
    pub fn max_page_count(&self) -> u32 {
        self.documents.iter().map(|d| d.page_count).max().unwrap_or(0)
    }

    pub fn has_page(&self, material_id: &str, page_num: u32) -> bool {
        self.documents
            .iter()
            .find(|d| d.material_id == material_id)
            .is_some_and(|d| page_num >= 1 && page_num <= d.page_count)
    }

    /// Toggles a page. Returns `None` and leaves the selection untouched when
    /// the document does not have that page.
    pub fn toggle_page(&mut self, material_id: &str, page_num: u32, student_name: &str) -> Option<ToggleOutcome> {
        if !self.has_page(material_id, page_num) {
            return None;
        }
        Some(self.selection.toggle(material_id, page_num, student_name))
    }

    pub fn is_selected(&self, material_id: &str, page_num: u32) -> bool {
        self.has_page(material_id, page_num) && self.selection.is_selected(material_id, page_num)
    }

    pub fn order_of(&self, material_id: &str, page_num: u32) -> Option<usize> {
        self.selection.order_of(material_id, page_num)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The request body for `generate-custom`, or a validation error when
    /// nothing is selected. The selection is never consumed here: callers
    /// drop the matrix only after the backend accepted it.
    pub fn prepare_submission(&self) -> Result<GenerateCustomRequest, ValidationError> {
        if self.selection.is_empty() {
            return Err(ValidationError::EmptySelection);
        }
        Ok(GenerateCustomRequest { selected_pages: self.ordered_selection().to_vec() })
    }
}

/// How the matrix is presented. Both views share the same selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MatrixView {
    #[default]
    Grid,
    Slider,
}

impl MatrixView {
    pub fn toggled(self) -> Self {
        match self {
            MatrixView::Grid => MatrixView::Slider,
            MatrixView::Slider => MatrixView::Grid,
        }
    }
}

/// Slider navigation: 1-based page cursor and 0-based document cursor,
/// clamped at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixCursor {
    page: u32,
    document: usize,
}

impl Default for MatrixCursor {
    fn default() -> Self {
        Self { page: 1, document: 0 }
    }
}

impl MatrixCursor {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn document(&self) -> usize {
        self.document
    }

    pub fn next_page(self, matrix: &SelectionMatrix) -> Self {
        Self { page: self.page.saturating_add(1), ..self }.clamped(matrix)
    }

    pub fn prev_page(self, matrix: &SelectionMatrix) -> Self {
        Self { page: self.page.saturating_sub(1), ..self }.clamped(matrix)
    }

    pub fn next_document(self, matrix: &SelectionMatrix) -> Self {
        Self { document: self.document.saturating_add(1), ..self }.clamped(matrix)
    }

    pub fn prev_document(self, matrix: &SelectionMatrix) -> Self {
        Self { document: self.document.saturating_sub(1), ..self }.clamped(matrix)
    }

    pub fn can_prev_page(&self) -> bool {
        self.page > 1
    }

    pub fn can_next_page(&self, matrix: &SelectionMatrix) -> bool {
        self.page < matrix.max_page_count()
    }

    pub fn can_prev_document(&self) -> bool {
        self.document > 0
    }

    pub fn can_next_document(&self, matrix: &SelectionMatrix) -> bool {
        self.document + 1 < matrix.documents().len()
    }

    /// Pulls the cursor back inside `[1, max_page_count]` and
    /// `[0, document_count - 1]`. An empty matrix pins it to the origin.
    pub fn clamped(self, matrix: &SelectionMatrix) -> Self {
        let max_page = matrix.max_page_count().max(1);
        let max_document = matrix.documents().len().saturating_sub(1);
        Self {
            page: self.page.clamp(1, max_page),
            document: self.document.min(max_document),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, name: &str, page_count: u32) -> SourceDocument {
        SourceDocument {
            material_id: id.to_string(),
            uploader_name: name.to_string(),
            page_count,
            quality_score: None,
            uploader_id: None,
        }
    }

    fn matrix() -> SelectionMatrix {
        SelectionMatrix::new(vec![doc("A", "Hong", 2), doc("B", "Kim", 1), doc("C", "Lee", 3)])
    }

    fn pairs(matrix: &SelectionMatrix) -> Vec<(String, u32)> {
        matrix.selection().as_slice().iter().map(|p| (p.material_id.clone(), p.page_num)).collect()
    }

    #[test]
    fn toggling_twice_restores_the_list() {
        let mut m = matrix();
        m.toggle_page("A", 1, "Hong");
        m.toggle_page("C", 2, "Lee");
        let before = m.selection().clone();

        assert_eq!(m.toggle_page("B", 1, "Kim"), Some(ToggleOutcome::Added));
        assert_eq!(m.toggle_page("B", 1, "Kim"), Some(ToggleOutcome::Removed));
        assert_eq!(m.selection(), &before);
    }

    #[test]
    fn reselecting_removes_and_keeps_the_rest_in_order() {
        let mut m = matrix();
        m.toggle_page("A", 1, "Hong");
        m.toggle_page("B", 1, "Kim");
        m.toggle_page("A", 1, "Hong");
        assert_eq!(pairs(&m), vec![("B".to_string(), 1)]);
    }

    #[test]
    fn removal_from_the_middle_does_not_reorder() {
        let mut m = matrix();
        m.toggle_page("C", 3, "Lee");
        m.toggle_page("A", 2, "Hong");
        m.toggle_page("C", 1, "Lee");
        m.toggle_page("A", 2, "Hong");
        assert_eq!(pairs(&m), vec![("C".to_string(), 3), ("C".to_string(), 1)]);
        assert_eq!(m.order_of("C", 1), Some(2));
    }

    #[test]
    fn pages_beyond_page_count_are_not_toggleable() {
        let mut m = matrix();
        assert_eq!(m.toggle_page("B", 2, "Kim"), None);
        assert_eq!(m.toggle_page("A", 0, "Hong"), None);
        assert_eq!(m.toggle_page("Z", 1, "Nobody"), None);
        assert!(!m.is_selected("B", 2));
        assert!(m.selection().is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut m = matrix();
        m.toggle_page("A", 1, "Hong");
        m.clear_selection();
        m.clear_selection();
        assert_eq!(m.selected_count(), 0);
    }

    #[test]
    fn empty_selection_cannot_be_submitted() {
        let m = matrix();
        assert_eq!(m.prepare_submission(), Err(ValidationError::EmptySelection));
    }

    #[test]
    fn submission_payload_keeps_selection_order() {
        let mut m = matrix();
        m.toggle_page("A", 1, "Hong");
        m.toggle_page("C", 1, "Lee");
        m.toggle_page("C", 3, "Lee");

        let request = m.prepare_submission().unwrap();
        let got: Vec<(&str, u32, &str)> = request
            .selected_pages
            .iter()
            .map(|p| (p.material_id.as_str(), p.page_num, p.student_name.as_str()))
            .collect();
        assert_eq!(got, vec![("A", 1, "Hong"), ("C", 1, "Lee"), ("C", 3, "Lee")]);
        // still there for a retry
        assert_eq!(m.selected_count(), 3);
    }

    #[test]
    fn max_page_count_covers_the_longest_document() {
        assert_eq!(matrix().max_page_count(), 3);
        assert_eq!(SelectionMatrix::default().max_page_count(), 0);
    }

    #[test]
    fn cursor_clamps_at_both_edges() {
        let m = matrix();
        let c = MatrixCursor::default();
        assert_eq!(c.prev_page(&m).page(), 1);
        assert_eq!(c.prev_document(&m).document(), 0);

        let c = c.next_page(&m).next_page(&m).next_page(&m).next_page(&m);
        assert_eq!(c.page(), 3);
        assert!(!c.can_next_page(&m));

        let c = c.next_document(&m).next_document(&m).next_document(&m);
        assert_eq!(c.document(), 2);
        assert!(!c.can_next_document(&m));
        assert!(c.can_prev_document());
    }

    #[test]
    fn cursor_on_empty_matrix_stays_at_origin() {
        let m = SelectionMatrix::default();
        let c = MatrixCursor::default().next_page(&m).next_document(&m);
        assert_eq!((c.page(), c.document()), (1, 0));
    }

    #[test]
    fn grid_and_slider_agree_on_selection() {
        // both views read through the same matrix, this guards the contract
        let mut m = matrix();
        let cursor = MatrixCursor::default().next_document(&m).next_document(&m).next_page(&m);
        let doc = m.document(cursor.document()).unwrap().clone();
        m.toggle_page(&doc.material_id, cursor.page(), &doc.uploader_name);
        assert!(m.is_selected("C", 2));
        assert_eq!(pairs(&m), vec![("C".to_string(), 2)]);
    }

    #[test]
    fn view_toggles_between_modes() {
        assert_eq!(MatrixView::Grid.toggled(), MatrixView::Slider);
        assert_eq!(MatrixView::Slider.toggled(), MatrixView::Grid);
    }
}
