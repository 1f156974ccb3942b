mod client_addr;
