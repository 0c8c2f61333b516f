pub mod patent_server;
