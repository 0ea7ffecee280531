mod store_flow;
