#[derive(Clone)]
pub enum Msg {
    Submit,
    Download,
}
