mod store_properties;
