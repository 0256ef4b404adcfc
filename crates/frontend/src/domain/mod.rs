pub mod a001_ata;
pub mod a002_customs_office;
pub mod a003_depot;
pub mod a004_dispatcher;
pub mod a005_shipper;
pub mod a006_consignee;
pub mod a007_interest_point;
pub mod a008_cargo;
pub mod a009_transport_company;
pub mod a010_security_alert;
