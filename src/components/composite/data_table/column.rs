//! Column Definition
//!
//! Defines table columns with their properties, accessors and cell renderers.

use std::cmp::Ordering;

use gpui::{AnyElement, IntoElement, SharedString};

type Accessor<R> = Box<dyn Fn(&R) -> SharedString + 'static>;
type CellRenderer<R> = Box<dyn Fn(&R) -> AnyElement + 'static>;
type Comparator<R> = Box<dyn Fn(&R, &R) -> Ordering + 'static>;

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column identifier (also the sort key)
    pub id: SharedString,
    /// Column header label
    pub label: SharedString,
    /// Column width (in pixels, or flexible)
    pub width: ColumnWidth,
    /// Whether the column is sortable
    pub sortable: bool,
    accessor: Option<Accessor<R>>,
    render: Option<CellRenderer<R>>,
    compare: Option<Comparator<R>>,
}

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Flexible width with optional minimum
    Flex { min: Option<f32> },
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: None }
    }
}

impl<R: 'static> Column<R> {
    /// Create a new column without content; add an accessor or a cell renderer
    pub fn new(id: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width: ColumnWidth::default(),
            sortable: false,
            accessor: None,
            render: None,
            compare: None,
        }
    }

    /// Plain-text accessor, used for the cell when no renderer is set
    /// and as the fallback sort key
    pub fn accessor(mut self, accessor: impl Fn(&R) -> SharedString + 'static) -> Self {
        self.accessor = Some(Box::new(accessor));
        self
    }

    /// Custom cell renderer
    pub fn cell(mut self, render: impl Fn(&R) -> AnyElement + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with optional minimum
    pub fn flex_width(mut self, min: Option<f32>) -> Self {
        self.width = ColumnWidth::Flex { min };
        self
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Make the column sortable with a custom ordering
    pub fn sort_by(mut self, compare: impl Fn(&R, &R) -> Ordering + 'static) -> Self {
        self.sortable = true;
        self.compare = Some(Box::new(compare));
        self
    }

    /// Text value of a cell, if the column has an accessor
    pub fn cell_text(&self, row: &R) -> Option<SharedString> {
        self.accessor.as_ref().map(|accessor| accessor(row))
    }

    /// Render a cell: renderer first, accessor text second, nothing otherwise
    pub fn render_cell(&self, row: &R) -> Option<AnyElement> {
        if let Some(render) = &self.render {
            return Some(render(row));
        }
        self.cell_text(row).map(|text| text.into_any_element())
    }

    /// Compare two rows on this column (ascending order)
    pub fn compare(&self, a: &R, b: &R) -> Ordering {
        if let Some(compare) = &self.compare {
            return compare(a, b);
        }
        match (self.cell_text(a), self.cell_text(b)) {
            (Some(a), Some(b)) => str::cmp(&a, &b),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        age: u32,
    }

    #[test]
    fn cell_text_uses_accessor() {
        let column = Column::<Row>::new("name", "Name").accessor(|r| r.name.into());
        let row = Row { name: "Ada", age: 12 };
        assert_eq!(column.cell_text(&row).as_ref().map(AsRef::<str>::as_ref), Some("Ada"));
    }

    #[test]
    fn column_without_content_yields_nothing() {
        let column = Column::<Row>::new("empty", "Empty");
        let row = Row { name: "Ada", age: 12 };
        assert!(column.cell_text(&row).is_none());
        assert!(column.render_cell(&row).is_none());
        assert!(!column.sortable);
    }

    #[test]
    fn compare_prefers_custom_ordering() {
        let column = Column::<Row>::new("age", "Age")
            .accessor(|r| r.age.to_string().into())
            .sort_by(|a, b| a.age.cmp(&b.age));
        let young = Row { name: "B", age: 9 };
        let old = Row { name: "A", age: 10 };
        // Text ordering would put "10" before "9"
        assert_eq!(column.compare(&young, &old), Ordering::Less);
        assert!(column.sortable);
    }

    #[test]
    fn compare_falls_back_to_text() {
        let column = Column::<Row>::new("name", "Name")
            .accessor(|r| r.name.into())
            .sortable();
        let a = Row { name: "Ada", age: 1 };
        let b = Row { name: "Bea", age: 1 };
        assert_eq!(column.compare(&a, &b), Ordering::Less);
    }
}
