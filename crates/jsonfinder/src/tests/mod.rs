mod facade;
mod property_partition;
