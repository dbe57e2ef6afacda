//! Admin registration forms for admins, officers, transport providers and
//! farmers.
//!
//! DESIGN
//! ======
//! The four forms differ only in which fields they show and which endpoint
//! they post to, so one form component is driven by `AccountKind`.

#[cfg(test)]
#[path = "register_accounts_test.rs"]
mod register_accounts_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{
    AdminCreate, AgricultureAuthorityCreate, FarmerCreate, RegisterResponse, TransportProviderCreate,
};
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::validation::{self, FieldError, MAX_LOCATION, MAX_NAME, MAX_USERNAME};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountKind {
    Admin,
    Officer,
    Transport,
    Farmer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    InstitutionName,
    Phone,
    VehicleType,
    Location,
    Username,
    Email,
    Password,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::InstitutionName => "Institution",
            Field::Phone => "Phone",
            Field::VehicleType => "Vehicle Type",
            Field::Location => "District",
            Field::Username => "Username",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::Phone => "tel",
            _ => "text",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Field::Phone => "+256700000000",
            Field::VehicleType => "e.g. Pickup, Truck, Van",
            _ => "",
        }
    }
}

impl AccountKind {
    pub fn heading(self) -> &'static str {
        match self {
            AccountKind::Admin => "Register Admin",
            AccountKind::Officer => "Register Agric Officer",
            AccountKind::Transport => "Register Transport Provider",
            AccountKind::Farmer => "Register Farmer",
        }
    }

    pub fn fields(self) -> &'static [Field] {
        match self {
            AccountKind::Admin => &[Field::Username, Field::Email, Field::Password],
            AccountKind::Officer => &[
                Field::Name,
                Field::InstitutionName,
                Field::Phone,
                Field::Location,
                Field::Username,
                Field::Email,
                Field::Password,
            ],
            AccountKind::Transport => &[
                Field::Name,
                Field::Phone,
                Field::VehicleType,
                Field::Location,
                Field::Username,
                Field::Email,
                Field::Password,
            ],
            AccountKind::Farmer => &[
                Field::Name,
                Field::Phone,
                Field::Location,
                Field::Username,
                Field::Email,
                Field::Password,
            ],
        }
    }
}

/// Raw form values; each kind reads only its own fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccountForm {
    pub name: String,
    pub institution_name: String,
    pub phone: String,
    pub vehicle_type: String,
    pub location: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl AccountForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::InstitutionName => &self.institution_name,
            Field::Phone => &self.phone,
            Field::VehicleType => &self.vehicle_type,
            Field::Location => &self.location,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::InstitutionName => &mut self.institution_name,
            Field::Phone => &mut self.phone,
            Field::VehicleType => &mut self.vehicle_type,
            Field::Location => &mut self.location,
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        };
        *slot = value;
    }
}

/// Validated request body for one account kind.
#[derive(Clone, Debug, PartialEq)]
pub enum AccountPayload {
    Admin(AdminCreate),
    Officer(AgricultureAuthorityCreate),
    Transport(TransportProviderCreate),
    Farmer(FarmerCreate),
}

struct Credentials {
    username: String,
    email: String,
    password: String,
}

fn credentials(form: &AccountForm) -> Result<Credentials, FieldError> {
    Ok(Credentials {
        username: validation::required_max("Username", &form.username, MAX_USERNAME)?,
        email: validation::email(&form.email)?,
        password: validation::password(&form.password)?,
    })
}

/// Validate `form` for `kind`, in on-screen field order.
///
/// # Errors
///
/// Returns the first failing field's message.
pub fn build_account(kind: AccountKind, form: &AccountForm) -> Result<AccountPayload, FieldError> {
    match kind {
        AccountKind::Admin => {
            let c = credentials(form)?;
            Ok(AccountPayload::Admin(AdminCreate { username: c.username, email: c.email, password: c.password }))
        }
        AccountKind::Officer => {
            let name = validation::required_max("Full Name", &form.name, MAX_NAME)?;
            let institution_name = validation::required_max("Institution", &form.institution_name, MAX_NAME)?;
            let phone = validation::phone(&form.phone)?;
            let location = validation::required_max("District", &form.location, MAX_LOCATION)?;
            let c = credentials(form)?;
            Ok(AccountPayload::Officer(AgricultureAuthorityCreate {
                institution_name,
                name,
                phone,
                location,
                username: c.username,
                email: c.email,
                password: c.password,
            }))
        }
        AccountKind::Transport => {
            let name = validation::required_max("Full Name", &form.name, MAX_NAME)?;
            let phone = validation::phone(&form.phone)?;
            let vehicle_type = validation::required_max("Vehicle Type", &form.vehicle_type, MAX_NAME)?;
            let location = validation::required_max("District", &form.location, MAX_LOCATION)?;
            let c = credentials(form)?;
            Ok(AccountPayload::Transport(TransportProviderCreate {
                name,
                phone,
                vehicle_type,
                location,
                username: c.username,
                email: c.email,
                password: c.password,
            }))
        }
        AccountKind::Farmer => {
            let name = validation::required_max("Full Name", &form.name, MAX_NAME)?;
            let phone = validation::phone(&form.phone)?;
            let location = validation::required_max("District", &form.location, MAX_LOCATION)?;
            let c = credentials(form)?;
            Ok(AccountPayload::Farmer(FarmerCreate {
                name,
                phone,
                location,
                username: c.username,
                email: c.email,
                password: c.password,
            }))
        }
    }
}

async fn submit(payload: AccountPayload) -> Result<RegisterResponse, ApiError> {
    match payload {
        AccountPayload::Admin(data) => api::register_admin(&data).await,
        AccountPayload::Officer(data) => api::register_authority(&data).await,
        AccountPayload::Transport(data) => api::register_transport(&data).await,
        AccountPayload::Farmer(data) => api::register_farmer(&data).await,
    }
}

#[component]
fn AccountRegistration(kind: AccountKind) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(AccountForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match build_account(kind, &form.get()) {
            Ok(payload) => payload,
            Err(err) => {
                error.set(Some(err.0));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        leptos::task::spawn_local(async move {
            match submit(payload).await {
                Ok(resp) => {
                    log::info!("registered user {}", resp.user_id);
                    notify_success(toasts, resp.message);
                    form.set(AccountForm::default());
                }
                Err(err) => notify_error(toasts, "Registration failed", &err),
            }
            busy.set(false);
        });
    };

    let inputs = kind
        .fields()
        .iter()
        .copied()
        .map(|field| {
            view! {
                <label class="form__field">
                    <span>{field.label()}</span>
                    <input
                        type=field.input_type()
                        placeholder=field.placeholder()
                        prop:value=move || form.with(|f| f.get(field).to_owned())
                        on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                    />
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="panel panel--narrow">
            <h2 class="panel__title">{kind.heading()}</h2>
            <form class="form" on:submit=on_submit>
                {inputs}
                <Show when=move || error.get().is_some()>
                    <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>
            </form>
        </div>
    }
}

#[component]
pub fn RegisterAdminPage() -> impl IntoView {
    view! { <AccountRegistration kind=AccountKind::Admin /> }
}

#[component]
pub fn RegisterOfficerPage() -> impl IntoView {
    view! { <AccountRegistration kind=AccountKind::Officer /> }
}

#[component]
pub fn RegisterTransportPage() -> impl IntoView {
    view! { <AccountRegistration kind=AccountKind::Transport /> }
}

#[component]
pub fn RegisterFarmerPage() -> impl IntoView {
    view! { <AccountRegistration kind=AccountKind::Farmer /> }
}
