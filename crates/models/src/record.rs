use uuid::Uuid;

/// A record held by an in-memory store.
///
/// The store owns id assignment; implementors only describe how a record is
/// built from its input and how an input replaces the mutable fields.
pub trait Record: Clone + Send + Sync + 'static {
    type Input: Send;

    /// Resource name used in logs and error messages.
    const KIND: &'static str;

    fn id(&self) -> Uuid;

    /// Id carried in the payload body, if any.
    fn input_id(input: &Self::Input) -> Option<Uuid>;

    fn from_input(id: Uuid, input: Self::Input) -> Self;

    /// Replace every non-id field with the values from `input`.
    fn apply(&mut self, input: Self::Input);
}
