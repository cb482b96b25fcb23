pub mod collection_table;
