// ABOUTME: Content module for the ds-slides application
// ABOUTME: Static reference data served by the read-only algorithms API

use serde::Serialize;
use serde_json::{Map, Value};

/// Time/space complexity row for one data structure.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ComplexityRow {
    pub access: &'static str,
    pub search: &'static str,
    pub insert: &'static str,
    pub delete: &'static str,
    pub space: &'static str,
}

/// A real-world application of a data structure.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Application {
    pub title: &'static str,
    pub description: &'static str,
}

struct StructureEntry {
    key: &'static str,
    description: &'static str,
    complexity: ComplexityRow,
    applications: Vec<Application>,
}

/// Fixed reference dataset for the presentation: complexity tables,
/// descriptions, code examples and real-world applications, keyed by
/// camelCase structure name. Built once at startup, never mutated.
pub struct ContentStore {
    structures: Vec<StructureEntry>,
    code_examples: Vec<(&'static str, &'static str)>,
}

/// Convert a public kebab-case structure name ("linked-lists") to the
/// camelCase key used by the dataset ("linkedLists").
pub fn structure_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            key.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            key.push(ch);
        }
    }
    key
}

impl ContentStore {
    /// The full dataset for the standard deck.
    pub fn standard() -> Self {
        let structures = vec![
            StructureEntry {
                key: "arrays",
                description: "A collection of elements stored at contiguous memory locations, accessible by index.",
                complexity: ComplexityRow {
                    access: "O(1)",
                    search: "O(n)",
                    insert: "O(n)",
                    delete: "O(n)",
                    space: "O(n)",
                },
                applications: vec![
                    Application { title: "Image Processing", description: "Pixel data storage" },
                    Application { title: "Todo Lists", description: "Simple item collections" },
                    Application { title: "Spreadsheets", description: "Grid-based data storage" },
                ],
            },
            StructureEntry {
                key: "linkedLists",
                description: "A sequence of nodes where each node contains data and a reference to the next node.",
                complexity: ComplexityRow {
                    access: "O(n)",
                    search: "O(n)",
                    insert: "O(1)",
                    delete: "O(1)",
                    space: "O(n)",
                },
                applications: vec![
                    Application { title: "Music Playlists", description: "Next/previous song navigation" },
                    Application { title: "Train Carriages", description: "Connected sequential cars" },
                    Application { title: "Browser History", description: "Back/forward navigation" },
                ],
            },
            StructureEntry {
                key: "stacks",
                description: "A collection that follows the Last-In-First-Out (LIFO) principle.",
                complexity: ComplexityRow {
                    access: "O(n)",
                    search: "O(n)",
                    insert: "O(1)",
                    delete: "O(1)",
                    space: "O(n)",
                },
                applications: vec![
                    Application { title: "Browser History", description: "Back button functionality" },
                    Application { title: "Function Calls", description: "Call stack for execution tracking" },
                ],
            },
            StructureEntry {
                key: "queues",
                description: "A collection that follows the First-In-First-Out (FIFO) principle.",
                complexity: ComplexityRow {
                    access: "O(n)",
                    search: "O(n)",
                    insert: "O(1)",
                    delete: "O(1)",
                    space: "O(n)",
                },
                applications: vec![
                    Application { title: "Print Jobs", description: "Documents waiting to be printed" },
                    Application { title: "Customer Support", description: "Customers waiting in line for service" },
                ],
            },
            StructureEntry {
                key: "trees",
                description: "A hierarchical data structure with a root value and subtrees of children.",
                complexity: ComplexityRow {
                    // Asterisk marks balanced-tree figures
                    access: "O(log n)*",
                    search: "O(log n)*",
                    insert: "O(log n)*",
                    delete: "O(log n)*",
                    space: "O(n)",
                },
                applications: vec![
                    Application { title: "File Systems", description: "Folders and files hierarchy" },
                    Application { title: "Database Indexing", description: "Fast data retrieval" },
                    Application { title: "Network Routing", description: "Finding optimal paths" },
                ],
            },
            StructureEntry {
                key: "hashTables",
                description: "A data structure that uses a hash function to map keys to values for efficient lookup.",
                complexity: ComplexityRow {
                    // Double asterisk marks average-case figures
                    access: "O(n)**",
                    search: "O(1)**",
                    insert: "O(1)**",
                    delete: "O(1)**",
                    space: "O(n)",
                },
                applications: vec![
                    Application { title: "Database Indexing", description: "Fast record lookup" },
                    Application { title: "User Sessions", description: "Storing active sessions by ID" },
                    Application { title: "Spell Checkers", description: "Fast word verification" },
                ],
            },
            StructureEntry {
                key: "graphs",
                description: "A collection of nodes (vertices) and edges connecting nodes, representing relationships.",
                complexity: ComplexityRow {
                    access: "O(n)",
                    search: "O(n)",
                    insert: "Varies",
                    delete: "Varies",
                    space: "O(V+E)",
                },
                applications: vec![
                    Application { title: "GPS Navigation", description: "Finding shortest routes" },
                    Application { title: "Social Networks", description: "Modeling connections" },
                    Application { title: "Internet Routing", description: "Data packet pathways" },
                ],
            },
        ];

        let code_examples = vec![
            (
                "arraySearch",
                r#"function linearSearch(arr, target) {
  for(let i = 0; i < arr.length; i++) {
    if(arr[i] === target) {
      return i;
    }
  }
  return -1;
}"#,
            ),
            (
                "linkedListInsert",
                r#"function insertAtHead(value) {
  const newNode = {
    data: value,
    next: this.head
  };
  this.head = newNode;
}"#,
            ),
            (
                "stackImplementation",
                r#"class Stack {
  constructor() {
    this.items = [];
  }

  push(element) {
    this.items.push(element);
  }

  pop() {
    if (this.isEmpty()) return "Underflow";
    return this.items.pop();
  }

  isEmpty() {
    return this.items.length === 0;
  }
}"#,
            ),
            (
                "queueImplementation",
                r#"class Queue {
  constructor() {
    this.items = {};
    this.frontIndex = 0;
    this.backIndex = 0;
  }

  enqueue(element) {
    this.items[this.backIndex] = element;
    this.backIndex++;
  }

  dequeue() {
    if (this.isEmpty()) return "Underflow";
    const item = this.items[this.frontIndex];
    delete this.items[this.frontIndex];
    this.frontIndex++;
    return item;
  }

  isEmpty() {
    return this.frontIndex === this.backIndex;
  }
}"#,
            ),
            (
                "treeTraversal",
                r#"// In-order traversal (Left-Root-Right)
function inOrder(node) {
  if (node) {
    inOrder(node.left);
    console.log(node.value);
    inOrder(node.right);
  }
}

// Pre-order traversal (Root-Left-Right)
function preOrder(node) {
  if (node) {
    console.log(node.value);
    preOrder(node.left);
    preOrder(node.right);
  }
}"#,
            ),
            (
                "hashTableImplementation",
                r#"class HashTable {
  constructor(size = 53) {
    this.table = new Array(size);
  }

  _hash(key) {
    let total = 0;
    for(let i = 0; i < key.length; i++) {
      total += key.charCodeAt(i);
    }
    return total % this.table.length;
  }

  set(key, value) {
    const index = this._hash(key);
    if(!this.table[index]) {
      this.table[index] = [];
    }
    this.table[index].push([key, value]);
    return index;
  }

  get(key) {
    const index = this._hash(key);
    if(!this.table[index]) return undefined;

    for(let i = 0; i < this.table[index].length; i++) {
      if(this.table[index][i][0] === key) {
        return this.table[index][i][1];
      }
    }
    return undefined;
  }
}"#,
            ),
            (
                "graphTraversal",
                r#"// BFS implementation
function bfs(graph, startNode) {
  const visited = new Set();
  const queue = [startNode];
  visited.add(startNode);

  while (queue.length) {
    const current = queue.shift();
    console.log(current);

    for (const neighbor of graph[current]) {
      if (!visited.has(neighbor)) {
        visited.add(neighbor);
        queue.push(neighbor);
      }
    }
  }
}"#,
            ),
        ];

        Self {
            structures,
            code_examples,
        }
    }

    /// Complexity rows for every structure, keyed by camelCase name.
    pub fn complexity(&self) -> Value {
        let mut map = Map::new();
        for entry in &self.structures {
            map.insert(
                entry.key.to_string(),
                serde_json::to_value(entry.complexity).unwrap_or(Value::Null),
            );
        }
        Value::Object(map)
    }

    /// One-line descriptions for every structure.
    pub fn descriptions(&self) -> Value {
        let mut map = Map::new();
        for entry in &self.structures {
            map.insert(entry.key.to_string(), Value::String(entry.description.to_string()));
        }
        Value::Object(map)
    }

    /// All named code examples.
    pub fn code_examples(&self) -> Value {
        let mut map = Map::new();
        for (name, code) in &self.code_examples {
            map.insert(name.to_string(), Value::String(code.to_string()));
        }
        Value::Object(map)
    }

    /// Real-world application lists for every structure.
    pub fn applications(&self) -> Value {
        let mut map = Map::new();
        for entry in &self.structures {
            map.insert(
                entry.key.to_string(),
                serde_json::to_value(&entry.applications).unwrap_or(Value::Null),
            );
        }
        Value::Object(map)
    }

    /// Combined data for one structure, looked up by its public
    /// kebab-case name. Returns `None` for unknown structures.
    pub fn structure_detail(&self, name: &str) -> Option<Value> {
        let key = structure_key(name);
        let entry = self.structures.iter().find(|entry| entry.key == key)?;

        // Code example names are singular ("stackImplementation"); match
        // them by the singular form of the structure key.
        let singular = key.strip_suffix('s').unwrap_or(&key).to_string();
        let mut examples = Map::new();
        for (example_name, code) in &self.code_examples {
            if example_name.starts_with(singular.as_str()) {
                examples.insert(example_name.to_string(), Value::String(code.to_string()));
            }
        }

        let mut detail = Map::new();
        detail.insert(
            "description".to_string(),
            Value::String(entry.description.to_string()),
        );
        detail.insert(
            "complexity".to_string(),
            serde_json::to_value(entry.complexity).unwrap_or(Value::Null),
        );
        detail.insert(
            "applications".to_string(),
            serde_json::to_value(&entry.applications).unwrap_or(Value::Null),
        );
        detail.insert("codeExamples".to_string(), Value::Object(examples));

        Some(Value::Object(detail))
    }

    /// Public (camelCase) keys of every structure in dataset order.
    pub fn structure_keys(&self) -> Vec<&'static str> {
        self.structures.iter().map(|entry| entry.key).collect()
    }
}
