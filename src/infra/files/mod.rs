pub mod disk_file_store;
