pub mod dog_list;
