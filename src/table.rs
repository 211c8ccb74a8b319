use log::{debug, warn};

use crate::error::ExecuteError;
use crate::row::Row;
use crate::{PAGE_SIZE, ROW_SIZE, ROWS_PER_PAGE, TABLE_MAX_PAGES, TABLE_MAX_ROWS};

type Page = Box<[u8; PAGE_SIZE]>;

const EMPTY_SLOT: [u8; ROW_SIZE] = [0; ROW_SIZE];

/// Append-only, in-memory table of fixed-width rows packed into lazily
/// allocated pages.
pub struct Table {
    num_rows: usize,
    pages: [Option<Page>; TABLE_MAX_PAGES],
}

impl Table {
    pub fn new() -> Self {
        Self {
            num_rows: 0,
            pages: std::array::from_fn(|_| None),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn is_full(&self) -> bool {
        self.num_rows >= TABLE_MAX_ROWS
    }

    /// Number of pages materialized so far.
    pub fn allocated_pages(&self) -> usize {
        self.pages.iter().filter(|page| page.is_some()).count()
    }

    pub fn append(&mut self, row: &Row) -> Result<(), ExecuteError> {
        if self.is_full() {
            warn!("insert rejected, table holds {} rows", self.num_rows);
            return Err(ExecuteError::TableFull);
        }
        row.serialize(self.row_slot_mut(self.num_rows));
        self.num_rows += 1;
        Ok(())
    }

    /// Every stored row in insertion order.
    pub fn scan_all(&self) -> impl Iterator<Item = Row> + '_ {
        (0..self.num_rows).map(|row_num| Row::deserialize(self.row_slot(row_num)))
    }

    fn slot_position(row_num: usize) -> (usize, usize) {
        let page_num = row_num / ROWS_PER_PAGE;
        let byte_offset = (row_num % ROWS_PER_PAGE) * ROW_SIZE;
        (page_num, byte_offset)
    }

    /// Caller guarantees `row_num < TABLE_MAX_ROWS`.
    fn row_slot_mut(&mut self, row_num: usize) -> &mut [u8] {
        let (page_num, byte_offset) = Self::slot_position(row_num);
        let page = self.pages[page_num].get_or_insert_with(|| {
            debug!("allocating page {page_num}");
            Box::new([0; PAGE_SIZE])
        });
        &mut page[byte_offset..byte_offset + ROW_SIZE]
    }

    fn row_slot(&self, row_num: usize) -> &[u8] {
        let (page_num, byte_offset) = Self::slot_position(row_num);
        match &self.pages[page_num] {
            Some(page) => &page[byte_offset..byte_offset + ROW_SIZE],
            None => &EMPTY_SLOT,
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Table {
    fn drop(&mut self) {
        debug!(
            "releasing table: {} rows in {} pages",
            self.num_rows,
            self.allocated_pages()
        );
    }
}
