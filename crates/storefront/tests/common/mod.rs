#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::Value;
use shared::{config::MediaConfig, errors::RepositoryError};
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};
use storefront::{
    abstract_trait::{
        category::{CategoryCommandRepositoryTrait, CategoryQueryRepositoryTrait},
        order::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
        order_line::{OrderLineCommandRepositoryTrait, OrderLineQueryRepositoryTrait},
        product::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
        storage::DynFileStorage,
    },
    di::Repositories,
    domain::requests::{
        CreateCategoryRequest, CreateOrderLineRequest, CreateOrderRequest, CreateProductRequest,
        FindAllProducts, UpdateCategoryRequest, UpdateOrderLineRequest, UpdateOrderRequest,
        UpdateProductRequest,
    },
    handler::AppRouter,
    model::{Category, Order, OrderLine, OrderLineWithProduct, Product, ProductWithCategory},
    repository::{CategoryRepository, OrderLineRepository, OrderRepository, ProductRepository},
    state::AppState,
    storage::LocalFileStorage,
};
use tempfile::TempDir;
use tower::ServiceExt;

/// Tables kept in memory with the foreign keys and cascades of the schema.
#[derive(Default)]
struct Tables {
    next_id: i32,
    categories: BTreeMap<i32, Category>,
    products: BTreeMap<i32, Product>,
    orders: BTreeMap<i32, Order>,
    lines: BTreeMap<i32, OrderLine>,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn product_with_category(&self, product: &Product) -> Option<ProductWithCategory> {
        let category = self.categories.get(&product.categoria_id)?;
        Some(ProductWithCategory {
            id: product.id,
            nombre: product.nombre.clone(),
            descripcion: product.descripcion.clone(),
            precio: product.precio.clone(),
            imagen: product.imagen.clone(),
            categoria_id: category.id,
            categoria_nombre: category.nombre.clone(),
        })
    }

    fn line_with_product(&self, line: &OrderLine) -> Option<OrderLineWithProduct> {
        let product = self.products.get(&line.producto_id)?;
        Some(OrderLineWithProduct {
            id: line.id,
            pedido_id: line.pedido_id,
            cantidad: line.cantidad,
            producto: self.product_with_category(product)?,
        })
    }

    fn name_taken(&self, nombre: &str, except: Option<i32>) -> bool {
        self.categories
            .values()
            .any(|c| c.nombre == nombre && Some(c.id) != except)
    }

    fn remove_product(&mut self, id: i32) {
        self.products.remove(&id);
        self.lines.retain(|_, line| line.producto_id != id);
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn product_count(&self) -> usize {
        self.tables.lock().unwrap().products.len()
    }

    pub fn line_count(&self) -> usize {
        self.tables.lock().unwrap().lines.len()
    }

    pub fn repositories(&self) -> Repositories {
        let store = Arc::new(self.clone());
        Repositories {
            category: CategoryRepository {
                query: store.clone(),
                command: store.clone(),
            },
            product: ProductRepository {
                query: store.clone(),
                command: store.clone(),
            },
            order: OrderRepository {
                query: store.clone(),
                command: store.clone(),
            },
            order_line: OrderLineRepository {
                query: store.clone(),
                command: store,
            },
        }
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(self.tables.lock().unwrap().categories.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepositoryError> {
        Ok(self.tables.lock().unwrap().categories.get(&id).cloned())
    }

    async fn find_by_name(&self, nombre: &str) -> Result<Option<Category>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .categories
            .values()
            .find(|c| c.nombre == nombre)
            .cloned())
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for MemoryStore {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<Category, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.name_taken(&req.nombre, None) {
            return Err(RepositoryError::AlreadyExists("categorias_nombre_key".into()));
        }
        let category = Category {
            id: tables.next_id(),
            nombre: req.nombre.clone(),
        };
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        req: &UpdateCategoryRequest,
    ) -> Result<Category, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let id = req.id.ok_or(RepositoryError::NotFound)?;
        if let Some(nombre) = &req.nombre {
            if tables.name_taken(nombre, Some(id)) {
                return Err(RepositoryError::AlreadyExists("categorias_nombre_key".into()));
            }
        }
        let category = tables
            .categories
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound)?;
        if let Some(nombre) = &req.nombre {
            category.nombre = nombre.clone();
        }
        Ok(category.clone())
    }

    async fn delete_category(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables
            .categories
            .remove(&id)
            .ok_or(RepositoryError::NotFound)?;
        let owned: Vec<i32> = tables
            .products
            .values()
            .filter(|p| p.categoria_id == id)
            .map(|p| p.id)
            .collect();
        for product in owned {
            tables.remove_product(product);
        }
        Ok(())
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for MemoryStore {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<Vec<ProductWithCategory>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .products
            .values()
            .filter(|p| req.categoria.is_none_or(|c| p.categoria_id == c))
            .filter_map(|p| tables.product_with_category(p))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductWithCategory>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .products
            .get(&id)
            .and_then(|p| tables.product_with_category(p)))
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MemoryStore {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductWithCategory, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.categories.contains_key(&req.categoria) {
            return Err(RepositoryError::ForeignKey("productos_categoria_id_fkey".into()));
        }
        let product = Product {
            id: tables.next_id(),
            nombre: req.nombre.clone(),
            descripcion: req.descripcion.clone(),
            precio: req.precio.clone(),
            imagen: req.imagen.clone(),
            categoria_id: req.categoria,
        };
        tables.products.insert(product.id, product.clone());
        tables
            .product_with_category(&product)
            .ok_or(RepositoryError::NotFound)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductWithCategory, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let id = req.id.ok_or(RepositoryError::NotFound)?;
        if let Some(categoria) = req.categoria {
            if !tables.categories.contains_key(&categoria) {
                return Err(RepositoryError::ForeignKey("productos_categoria_id_fkey".into()));
            }
        }
        let product = tables.products.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        if let Some(nombre) = &req.nombre {
            product.nombre = nombre.clone();
        }
        if let Some(descripcion) = &req.descripcion {
            product.descripcion = descripcion.clone();
        }
        if let Some(precio) = &req.precio {
            product.precio = precio.clone();
        }
        if let Some(imagen) = &req.imagen {
            product.imagen = Some(imagen.clone());
        }
        if let Some(categoria) = req.categoria {
            product.categoria_id = categoria;
        }
        let product = product.clone();
        tables
            .product_with_category(&product)
            .ok_or(RepositoryError::NotFound)
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.products.contains_key(&id) {
            return Err(RepositoryError::NotFound);
        }
        tables.remove_product(id);
        Ok(())
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        Ok(self.tables.lock().unwrap().orders.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        Ok(self.tables.lock().unwrap().orders.get(&id).cloned())
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for MemoryStore {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<Order, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let order = Order {
            id: tables.next_id(),
            nombre_cliente: req.nombre_cliente.clone(),
            telefono: req.telefono.clone(),
            total: req.total.clone(),
            estado: req.estado.unwrap_or_default().to_string(),
            fecha_creacion: Utc::now(),
        };
        tables.orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn update_order(&self, req: &UpdateOrderRequest) -> Result<Order, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let id = req.id.ok_or(RepositoryError::NotFound)?;
        let order = tables.orders.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        if let Some(nombre_cliente) = &req.nombre_cliente {
            order.nombre_cliente = nombre_cliente.clone();
        }
        if let Some(telefono) = &req.telefono {
            order.telefono = telefono.clone();
        }
        if let Some(total) = &req.total {
            order.total = total.clone();
        }
        if let Some(estado) = req.estado {
            order.estado = estado.to_string();
        }
        Ok(order.clone())
    }

    async fn delete_order(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.orders.remove(&id).ok_or(RepositoryError::NotFound)?;
        tables.lines.retain(|_, line| line.pedido_id != id);
        Ok(())
    }
}

#[async_trait]
impl OrderLineQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<OrderLineWithProduct>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .lines
            .values()
            .filter_map(|line| tables.line_with_product(line))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderLineWithProduct>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .lines
            .get(&id)
            .and_then(|line| tables.line_with_product(line)))
    }

    async fn find_by_order_ids(
        &self,
        order_ids: &[i32],
    ) -> Result<Vec<OrderLineWithProduct>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .lines
            .values()
            .filter(|line| order_ids.contains(&line.pedido_id))
            .filter_map(|line| tables.line_with_product(line))
            .collect())
    }
}

#[async_trait]
impl OrderLineCommandRepositoryTrait for MemoryStore {
    async fn create_order_line(
        &self,
        req: &CreateOrderLineRequest,
    ) -> Result<OrderLine, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.orders.contains_key(&req.pedido) || !tables.products.contains_key(&req.producto)
        {
            return Err(RepositoryError::ForeignKey("detalles_pedido_fkey".into()));
        }
        let line = OrderLine {
            id: tables.next_id(),
            pedido_id: req.pedido,
            producto_id: req.producto,
            cantidad: req.cantidad,
        };
        tables.lines.insert(line.id, line.clone());
        Ok(line)
    }

    async fn update_order_line(
        &self,
        req: &UpdateOrderLineRequest,
    ) -> Result<OrderLine, RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        let id = req.id.ok_or(RepositoryError::NotFound)?;
        let line = tables.lines.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        if let Some(pedido) = req.pedido {
            line.pedido_id = pedido;
        }
        if let Some(producto) = req.producto {
            line.producto_id = producto;
        }
        if let Some(cantidad) = req.cantidad {
            line.cantidad = cantidad;
        }
        Ok(line.clone())
    }

    async fn delete_order_line(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.lines.remove(&id).ok_or(RepositoryError::NotFound)?;
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
    pub media: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let store = MemoryStore::default();
        let media = tempfile::tempdir().unwrap();
        let media_config = MediaConfig {
            root: media.path().to_path_buf(),
            url: "/media/".into(),
        };

        let storage = Arc::new(LocalFileStorage::new(&media_config)) as DynFileStorage;
        let state = AppState::with_repositories(store.repositories(), storage, media_config);

        Self {
            router: AppRouter::build(state),
            store,
            media,
        }
    }

    pub async fn request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn send_json(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send_json("POST", uri, body).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send_json("PUT", uri, body).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send_json("PATCH", uri, body).await
    }

    /// Creates a category and returns its id.
    pub async fn category(&self, nombre: &str) -> i64 {
        let (status, body) = self
            .post("/api/categorias/", serde_json::json!({ "nombre": nombre }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }

    /// Creates a product in `categoria` and returns its id.
    pub async fn product(&self, nombre: &str, precio: &str, categoria: i64) -> i64 {
        let (status, body) = self
            .post(
                "/api/productos/",
                serde_json::json!({
                    "nombre": nombre,
                    "descripcion": format!("{nombre} de la casa"),
                    "precio": precio,
                    "categoria": categoria,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }

    /// Creates an order and returns its id.
    pub async fn order(&self, nombre_cliente: &str, total: &str) -> i64 {
        let (status, body) = self
            .post(
                "/api/pedidos/",
                serde_json::json!({
                    "nombre_cliente": nombre_cliente,
                    "telefono": "5512345678",
                    "total": total,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }
}
