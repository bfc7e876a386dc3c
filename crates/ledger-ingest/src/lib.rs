pub mod sheet;

pub use sheet::{
    SheetTable, ledger_records, ledger_table, read_sheet, read_sheet_or_empty, source_records,
    write_sheet,
};
