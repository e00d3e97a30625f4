pub use super::contest::Entity as Contest;
pub use super::contest_category::Entity as ContestCategory;
pub use super::establo::Entity as Establo;
pub use super::ganado::Entity as Ganado;
pub use super::propietario::Entity as Propietario;
