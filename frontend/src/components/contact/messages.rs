use super::state::Field;

pub enum Msg {
    Edit(Field, String),
    Submit,
    Finished(Result<String, String>),
}
