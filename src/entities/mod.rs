pub mod contest;
pub mod contest_category;
pub mod establo;
pub mod ganado;
pub mod propietario;

pub use contest::Entity as Contest;
pub use contest_category::Entity as ContestCategory;
pub use establo::Entity as Establo;
pub use ganado::Entity as Ganado;
pub use propietario::Entity as Propietario;

pub mod prelude;
