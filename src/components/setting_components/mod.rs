pub mod lunasea;
