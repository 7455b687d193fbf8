//! Creating and listing clients.

use crate::config::Config;
use crate::model::Client;
use crate::store::JsonStore;
use crate::{Error, Result};

/// What is needed to create a client.
#[derive(Debug, Clone, Default)]
pub struct NewClient {
    /// The id of the client. `client-{vat_id}` if absent.
    pub id: Option<String>,

    /// The name of the client.
    pub name: String,

    /// The VAT identification number.
    pub vat_id: String,

    /// The street address.
    pub address1: String,

    /// The city, region and zip code.
    pub address2: String,

    /// The phone number.
    pub phone: String,
}

/// Creates and lists the clients of a project.
pub struct ClientService {
    /// The client store.
    clients: JsonStore<Client>,
}

impl ClientService {
    /// Creates a service using the client directory of a configuration.
    pub fn new(config: &Config) -> ClientService {
        ClientService {
            clients: JsonStore::new(&config.dirs.client),
        }
    }

    /// Creates and stores a client.
    pub fn create(&self, request: NewClient) -> Result<Client> {
        let id = match request.id.filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => format!("client-{}", request.vat_id),
        };

        let client = Client {
            id,
            name: request.name,
            vat_id: request.vat_id,
            address1: request.address1,
            address2: request.address2,
            phone: request.phone,
        };

        self.clients.create(&client)?;
        info!("created client {}", client.id);

        Ok(client)
    }

    /// Reads a client.
    pub fn read(&self, id: &str) -> Result<Client> {
        self.clients.read(id)?.ok_or_else(|| Error::NotFound {
            kind: "client",
            id: String::from(id),
        })
    }

    /// Lists the clients whose id or name contains a filter, ignoring case. Every client if there
    /// is no filter.
    pub fn list(&self, filter: Option<&str>) -> Result<Vec<Client>> {
        let filter = filter.map(str::to_lowercase);

        self.clients.list(|client| match &filter {
            Some(filter) => {
                client.id.to_lowercase().contains(filter.as_str())
                    || client.name.to_lowercase().contains(filter.as_str())
            }
            None => true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(root: &std::path::Path) -> ClientService {
        let mut config = Config::default();
        config.dirs.client = root.to_path_buf();
        ClientService::new(&config)
    }

    fn request(name: &str, vat_id: &str) -> NewClient {
        NewClient {
            name: String::from(name),
            vat_id: String::from(vat_id),
            ..NewClient::default()
        }
    }

    #[test]
    fn default_id_uses_the_vat_id() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(dir.path());

        let client = service.create(request("Acme", "ES12345678A")).unwrap();
        assert_eq!(client.id, "client-ES12345678A");
        assert_eq!(service.read("client-ES12345678A").unwrap().name, "Acme");
    }

    #[test]
    fn explicit_id_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(dir.path());

        let client = service
            .create(NewClient {
                id: Some(String::from("acme")),
                ..request("Acme", "ES1")
            })
            .unwrap();
        assert_eq!(client.id, "acme");
    }

    #[test]
    fn list_filters_by_name_or_id() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(dir.path());

        service.create(request("Acme Corp", "A1")).unwrap();
        service.create(request("Globex", "G1")).unwrap();

        assert_eq!(service.list(None).unwrap().len(), 2);

        let found = service.list(Some("acme")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Acme Corp");

        assert_eq!(service.list(Some("g1")).unwrap().len(), 1);
    }

    #[test]
    fn unknown_client_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            service(dir.path()).read("nobody"),
            Err(Error::NotFound { .. })
        ));
    }
}
